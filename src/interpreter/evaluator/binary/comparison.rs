use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison between two values.
    ///
    /// `==` and `!=` compare structurally and accept any two values; values
    /// of different types are simply unequal. The ordering operators use
    /// [`Value::compare`], which only orders values of the same type.
    ///
    /// # Returns
    /// `Value::Bool` with the outcome.
    ///
    /// # Errors
    /// - `UnorderedComparison` if an ordering operator is applied to values
    ///   of different types.
    /// - `TypeError` if `op` is not a comparison operator.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let one = Value::Number(1.0);
    /// let text = Value::from("1");
    ///
    /// let equal = Context::eval_comparison(BinaryOperator::Equal, &one, &text, 1).unwrap();
    /// assert_eq!(equal, Value::Bool(false));
    ///
    /// assert!(Context::eval_comparison(BinaryOperator::Less, &one, &text, 1).is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Equal => left == right,
            BinaryOperator::NotEqual => left != right,
            BinaryOperator::Less => left.compare(right, line)?.is_lt(),
            BinaryOperator::LessEqual => left.compare(right, line)?.is_le(),
            BinaryOperator::Greater => left.compare(right, line)?.is_gt(),
            BinaryOperator::GreaterEqual => left.compare(right, line)?.is_ge(),
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison operator"),
                                                     line });
            },
        };

        Ok(Value::Bool(result))
    }
}
