use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands must be integers and are evaluated left before right;
    /// the order is observable when an operand contains a function call or
    /// a scoped binding. Addition, subtraction, and multiplication are
    /// checked and report `Overflow` instead of wrapping. Division uses
    /// floor semantics and rejects a zero divisor before dividing.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The arithmetic operator.
    /// - `right`: Right operand expression.
    /// - `offset`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// The computed integer wrapped in a [`Value`].
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 offset: usize)
                                 -> EvalResult<Value> {
        let left = self.eval_int(left)?;
        let right = self.eval_int(right)?;

        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position: offset });
                }
                return Ok(Value::Integer(floor_div(left, right, offset)?));
            },
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { position: offset })
    }

    /// Evaluates an equality test.
    ///
    /// There is no boolean type: `==` yields the integer 1 when both sides
    /// are equal and 0 otherwise. Equality is the only comparison the
    /// language has, which the closed operator enum guarantees statically.
    pub(crate) fn eval_comparison(&mut self,
                                  left: &Expr,
                                  op: ComparisonOperator,
                                  right: &Expr,
                                  _offset: usize)
                                  -> EvalResult<Value> {
        let left = self.eval_int(left)?;
        let right = self.eval_int(right)?;

        match op {
            ComparisonOperator::Equal => Ok(Value::Integer(i64::from(left == right))),
        }
    }
}

/// Divides with the result truncated toward negative infinity.
///
/// The divisor is known to be non-zero here. Floor semantics differ from
/// Rust's truncating `/` only when the operands' signs differ and the
/// division is inexact: `(0 - 7) / 2` is `-4`, not `-3`.
fn floor_div(left: i64, right: i64, position: usize) -> EvalResult<i64> {
    let quotient = left.checked_div(right)
                       .ok_or(RuntimeError::Overflow { position })?;

    if left % right != 0 && (left < 0) != (right < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}
