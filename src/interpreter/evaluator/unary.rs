use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Both operators only apply to numbers: `+` returns the number unchanged
    /// and `-` negates it.
    ///
    /// # Errors
    /// Returns a `TypeError` for any non-numeric operand.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::from("five"), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Number(n)) => Ok(Value::Number(*n)),
            (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::TypeError { details: format!("Cannot apply unary '{op}' to {}",
                                                                value.type_name()),
                                               line }),
        }
    }
}
