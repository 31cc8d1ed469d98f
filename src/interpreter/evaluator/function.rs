use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter, RECURSION_LIMIT},
            scope::GLOBAL_FRAME,
        },
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a function call.
    ///
    /// The call proceeds in a fixed order:
    ///
    /// 1. Resolve the definition by name from the global function table.
    /// 2. Evaluate every argument expression, left to right, in the
    ///    *caller's* current scope.
    /// 3. Check the argument count against the declared parameter count.
    /// 4. Push a fresh frame whose parent is the **global** frame — never
    ///    the caller's frame. Function bodies therefore see only their own
    ///    parameters and global bindings; there are no closures.
    /// 5. Bind parameters sequentially. A duplicated parameter name binds
    ///    twice and the last position wins.
    /// 6. Evaluate the body, then pop the frame on either outcome.
    ///
    /// Active calls are counted and the call that would exceed
    /// [`RECURSION_LIMIT`] fails with a typed error instead of exhausting
    /// the host stack.
    ///
    /// # Parameters
    /// - `name`: Function name from the `#name(...)` call site.
    /// - `arguments`: Argument expressions in source order.
    /// - `offset`: Byte offset of the call, for error reporting.
    ///
    /// # Errors
    /// - `UnknownFunction` when no definition exists under `name`.
    /// - `ArityMismatch` when the argument count is wrong.
    /// - `RecursionLimit` when calls nest too deeply.
    /// - Anything raised by argument or body evaluation.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     offset: usize)
                                     -> EvalResult<Value> {
        let def = self.functions
                      .get(name)
                      .cloned()
                      .ok_or_else(|| RuntimeError::UnknownFunction { name:     name.to_string(),
                                                                     position: offset, })?;

        let mut arg_values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_values.push(self.eval_int(argument)?);
        }

        if arg_values.len() != def.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: def.params.len(),
                                                     found:    arg_values.len(),
                                                     position: offset, });
        }

        if self.depth >= RECURSION_LIMIT {
            return Err(RuntimeError::RecursionLimit { limit:    RECURSION_LIMIT,
                                                      position: offset, });
        }
        self.depth += 1;

        let saved = self.current;
        let mark = self.frames.len();
        self.push_frame(GLOBAL_FRAME);

        for (param, value) in def.params.iter().zip(arg_values) {
            self.define_variable(param, value);
        }

        let result = self.eval_expr(&def.body);

        self.restore_frames(mark, saved);
        self.depth -= 1;
        result
    }
}
