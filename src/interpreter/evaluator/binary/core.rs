use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are routed to `eval_arithmetic`; the six
    /// comparison operators to `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let less = Context::eval_binary(BinaryOperator::Less, &left, &right, 1);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        if op.is_comparison() {
            Self::eval_comparison(op, left, right, line)
        } else {
            Self::eval_arithmetic(op, left, right, line)
        }
    }
}
