use std::collections::HashMap;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::scope::{Frame, GLOBAL_FRAME},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum depth of nested function calls.
///
/// A non-terminating recursion must surface as a typed, catchable error
/// rather than exhausting the host call stack, so the interpreter counts
/// active calls and rejects the one that would exceed this limit. The limit
/// stands in for the host's own recursion limit; there is no tail-call
/// optimization.
pub const RECURSION_LIMIT: usize = 500;

/// Stores the runtime evaluation state for one session.
///
/// The interpreter owns the durable global scope, the global-only function
/// table, and the arena of scope frames created and discarded during
/// evaluation. It is created once and fed one statement per call; `let`
/// statements and `func` definitions executed at the top level persist
/// across calls, so a sequence of calls behaves like a session.
///
/// ## Usage
///
/// ```
/// use nitlang::{eval_line, interpreter::evaluator::core::Interpreter, interpreter::value::Value};
///
/// let mut interpreter = Interpreter::new();
/// eval_line(&mut interpreter, "let x = 40").unwrap();
/// let value = eval_line(&mut interpreter, "x + 2").unwrap();
/// assert_eq!(value, Value::Integer(42));
/// ```
pub struct Interpreter {
    /// Arena of scope frames. `frames[0]` is the global frame and lives for
    /// the interpreter's lifetime; every other frame exists only for the
    /// duration of one function call or `let` expression.
    pub(crate) frames:    Vec<Frame>,
    /// Index of the current frame. Always equals [`GLOBAL_FRAME`] between
    /// top-level calls; temporarily redirected during sub-evaluations and
    /// restored on every exit path, error or not.
    pub(crate) current:   usize,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// This namespace is global-only and disjoint from variables: `func`
    /// registers here no matter where in a line it appears.
    pub(crate) functions: HashMap<String, FunctionDef>,
    /// Number of function calls currently on the evaluation stack.
    pub(crate) depth:     usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates a new interpreter with an empty global scope and no defined
    /// functions.
    #[must_use]
    pub fn new() -> Self {
        Self { frames:    vec![Frame::global()],
               current:   GLOBAL_FRAME,
               functions: HashMap::new(),
               depth:     0, }
    }

    /// Evaluates a single statement against the session state.
    ///
    /// This is the top-level evaluation entry point: one parsed source line
    /// goes in, one value or error comes out. `let` statements define into
    /// the current scope (the global scope at the top level), `func`
    /// definitions register globally, and expression statements produce an
    /// integer.
    ///
    /// Each call is its own unit of atomicity: a failure aborts the call
    /// but never rolls back bindings committed by earlier calls.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating the statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval_int(value)?;
                self.define_variable(name, value);
                Ok(Value::Declaration(format!("Variable '{name}' = {value}")))
            },
            Statement::Function(def) => {
                self.functions.insert(def.name.clone(), def.clone());
                Ok(Value::Declaration(format!("Function '{}' defined", def.name)))
            },
            Statement::Expression { expr, .. } => self.eval_expr(expr),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant; the enum is
    /// closed, so every construct the parser can produce has a handler
    /// here. Operands evaluate left before right and arguments left to
    /// right, so evaluation order is fully deterministic.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Integer(*value)),
            Expr::Variable { name, offset } => self.eval_variable(name, *offset),
            Expr::BinaryOp { left,
                             op,
                             right,
                             offset, } => self.eval_binary_op(left, *op, right, *offset),
            Expr::Comparison { left,
                               op,
                               right,
                               offset, } => self.eval_comparison(left, *op, right, *offset),
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => self.eval_if_expr(condition, then_branch, else_branch),
            Expr::LetExpr { name,
                            value,
                            body,
                            .. } => self.eval_let_expr(name, value, body),
            Expr::FunctionCall { name,
                                 arguments,
                                 offset, } => self.eval_function_call(name, arguments, *offset),
            Expr::Block { statements, offset } => self.eval_block(statements, *offset),
        }
    }

    /// Evaluates an expression that must produce an integer.
    ///
    /// Most evaluation contexts (operands, conditions, bound values,
    /// arguments) require a number. A declaration acknowledgment arriving
    /// here is the defined `DeclarationAsValue` error.
    pub(crate) fn eval_int(&mut self, expr: &Expr) -> EvalResult<i64> {
        let value = self.eval_expr(expr)?;
        value.as_integer()
             .ok_or(RuntimeError::DeclarationAsValue { position: expr.offset() })
    }

    /// Reads a variable from the current scope chain.
    fn eval_variable(&self, name: &str, offset: usize) -> EvalResult<Value> {
        self.lookup_variable(name)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::UnknownVariable { name:     name.to_string(),
                                                           position: offset, })
    }

    /// Evaluates a conditional expression.
    ///
    /// Zero is false, every other integer is true. Only the taken branch is
    /// evaluated, so the untaken branch can neither fail nor bind anything.
    fn eval_if_expr(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr)
                    -> EvalResult<Value> {
        let condition = self.eval_int(condition)?;

        if condition != 0 {
            self.eval_expr(then_branch)
        } else {
            self.eval_expr(else_branch)
        }
    }

    /// Evaluates a scoped `let ... in ...` binding.
    ///
    /// The bound value is computed in the enclosing scope, then a child
    /// frame holding the single binding is made current for exactly the
    /// body evaluation. The frame is discarded on both the success and the
    /// error path, so an inner shadow can never leak outward.
    fn eval_let_expr(&mut self, name: &str, value: &Expr, body: &Expr) -> EvalResult<Value> {
        let value = self.eval_int(value)?;

        let saved = self.current;
        let mark = self.frames.len();
        self.push_frame(saved);
        self.define_variable(name, value);

        let result = self.eval_expr(body);

        self.restore_frames(mark, saved);
        result
    }

    /// Evaluates a block of statements in order.
    ///
    /// Statements run against the current scope, so a `let` statement in a
    /// function body is visible to the statements after it but never
    /// escapes the call. The block's value is the value of its last
    /// statement; an empty block has no value and is a defined error.
    fn eval_block(&mut self, statements: &[Statement], offset: usize) -> EvalResult<Value> {
        let mut last = None;
        for statement in statements {
            last = Some(self.eval_statement(statement)?);
        }

        last.ok_or(RuntimeError::EmptyBlock { position: offset })
    }
}
