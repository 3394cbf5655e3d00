use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation.
    ///
    /// Supported operators:
    /// - `Negate`: arithmetic negation. The operand must be a number.
    /// - `Not`: logical negation of the operand's truthiness, always
    ///   producing a boolean.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `expr`: Operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - `OperandMustBeNumber` when negating a non-number.
    pub(in crate::interpreter::evaluator) fn eval_unary(&mut self,
                                                        op: UnaryOperator,
                                                        expr: &Expr,
                                                        line: usize)
                                                        -> EvalResult<Value> {
        let value = self.evaluate(expr)?;

        match op {
            UnaryOperator::Negate => match value {
                Value::Number(number) => Ok(Value::Number(-number)),
                _ => Err(RuntimeError::OperandMustBeNumber { line }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
