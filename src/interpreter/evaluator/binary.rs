use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left first, before the operator is
    /// applied. Supported operators:
    /// - `Add`: numeric addition, or string concatenation when either
    ///   operand is a string (the other operand is stringified).
    /// - `Sub`, `Mul`, `Div`: arithmetic on numbers. Division by zero is an
    ///   error rather than an infinity.
    /// - `Greater`, `GreaterEqual`, `Less`, `LessEqual`: numeric ordering.
    /// - `Equal`, `NotEqual`: value equality across all types. Operands of
    ///   different types are never equal; no coercion is applied.
    /// - `Comma`: discards the left value and yields the right.
    ///
    /// # Parameters
    /// - `left`, `right`: Operand expressions.
    /// - `op`: Binary operator.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - `UnsupportedAddition` for `+` on operands that are neither two
    ///   numbers nor a string with anything.
    /// - `OperandsMustBeNumbers` for the other arithmetic and ordering
    ///   operators on non-numbers.
    /// - `DivisionByZero` for `/` with a zero divisor.
    pub(in crate::interpreter::evaluator) fn eval_binary(&mut self,
                                                         left: &Expr,
                                                         op: BinaryOperator,
                                                         right: &Expr,
                                                         line: usize)
                                                         -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op {
            BinaryOperator::Add => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(_), _) | (_, Value::Str(_)) => {
                    Ok(Value::Str(format!("{left}{right}")))
                },
                _ => Err(RuntimeError::UnsupportedAddition { line }),
            },
            BinaryOperator::Sub => Self::arithmetic(&left, &right, line, |a, b| a - b),
            BinaryOperator::Mul => Self::arithmetic(&left, &right, line, |a, b| a * b),
            BinaryOperator::Div => match (&left, &right) {
                (Value::Number(_), Value::Number(b)) if *b == 0.0 => {
                    Err(RuntimeError::DivisionByZero { line })
                },
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
                _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
            },
            BinaryOperator::Greater => Self::comparison(&left, &right, line, |a, b| a > b),
            BinaryOperator::GreaterEqual => Self::comparison(&left, &right, line, |a, b| a >= b),
            BinaryOperator::Less => Self::comparison(&left, &right, line, |a, b| a < b),
            BinaryOperator::LessEqual => Self::comparison(&left, &right, line, |a, b| a <= b),
            BinaryOperator::Equal => Ok(Value::Bool(left == right)),
            BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
            BinaryOperator::Comma => Ok(right),
        }
    }

    /// Evaluates a short-circuiting logical operation.
    ///
    /// The result is one of the operand values, not a coerced boolean:
    /// `"" || "fallback"` yields `"fallback"`, and `x && f(x)` yields `x`
    /// when `x` is falsy. The right operand is only evaluated when the left
    /// does not already decide the result.
    pub(in crate::interpreter::evaluator) fn eval_logical(&mut self,
                                                          left: &Expr,
                                                          op: LogicalOperator,
                                                          right: &Expr)
                                                          -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        match op {
            LogicalOperator::And if !left.is_truthy() => Ok(left),
            LogicalOperator::Or if left.is_truthy() => Ok(left),
            _ => self.evaluate(right),
        }
    }

    /// Evaluates a ternary conditional.
    ///
    /// Both branches are evaluated regardless of the condition, left to
    /// right, and the condition's truthiness then selects which value the
    /// expression yields. An error in either branch therefore surfaces even
    /// when that branch is not selected.
    pub(in crate::interpreter::evaluator) fn eval_ternary(&mut self,
                                                          condition: &Expr,
                                                          then_branch: &Expr,
                                                          else_branch: &Expr)
                                                          -> EvalResult<Value> {
        let condition = self.evaluate(condition)?;
        let then_value = self.evaluate(then_branch)?;
        let else_value = self.evaluate(else_branch)?;

        if condition.is_truthy() {
            Ok(then_value)
        } else {
            Ok(else_value)
        }
    }

    fn arithmetic(left: &Value,
                  right: &Value,
                  line: usize,
                  apply: impl Fn(f64, f64) -> f64)
                  -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(*a, *b))),
            _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
        }
    }

    fn comparison(left: &Value,
                  right: &Value,
                  line: usize,
                  apply: impl Fn(f64, f64) -> bool)
                  -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(apply(*a, *b))),
            _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
        }
    }
}
