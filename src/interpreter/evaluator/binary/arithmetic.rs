use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::truncate_to_i64,
};

impl Context {
    /// Applies an arithmetic operator.
    ///
    /// Supported combinations:
    /// - number with number: `+`, `-`, `*`, `/`;
    /// - string `+` string and array `+` array: concatenation;
    /// - string or array `*` number (either order): repetition, with the count
    ///   truncated towards zero and negative counts giving an empty result.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by zero.
    /// - `TypeError` for any other combination of operand types.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};
        use Value::{Array, Number, String};

        match (op, left, right) {
            (_, Number(a), Number(b)) => Self::eval_number_op(op, *a, *b, line),

            (Add, String(a), String(b)) => Ok(Value::from(format!("{a}{b}"))),

            (Add, Array(a), Array(b)) => {
                Ok(Value::from(a.iter().chain(b.iter()).cloned().collect::<Vec<_>>()))
            },

            (Mul, String(s), Number(n)) | (Mul, Number(n), String(s)) => {
                Ok(Value::from(s.repeat(repeat_count(s.len(), *n, line)?)))
            },

            (Mul, Array(a), Number(n)) | (Mul, Number(n), Array(a)) => {
                let count = repeat_count(a.len(), *n, line)?;
                Ok(Value::from((0..count).flat_map(|_| a.iter().cloned()).collect::<Vec<_>>()))
            },

            _ => Err(RuntimeError::TypeError { details: format!("Cannot use '{op}' on {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                               line }),
        }
    }

    fn eval_number_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a / b
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                                                     line });
            },
        };

        Ok(Value::Number(result))
    }
}

/// Upper bound on the length of a repeated string (in bytes) or array.
pub const MAX_REPEAT_LEN: usize = 1 << 28;

/// Converts a repetition count to `usize`; negative counts become zero.
///
/// # Errors
/// Returns `InvalidArgument` if repeating `len` items `count` times would
/// exceed [`MAX_REPEAT_LEN`].
fn repeat_count(len: usize, count: f64, line: usize) -> EvalResult<usize> {
    let count = usize::try_from(truncate_to_i64(count, line)?).unwrap_or(0);

    match len.checked_mul(count) {
        Some(0) => Ok(0),
        Some(total) if total <= MAX_REPEAT_LEN => Ok(count),
        _ => Err(RuntimeError::InvalidArgument { details: format!("Repeating {len} items {count} times exceeds the limit of {MAX_REPEAT_LEN}"),
                                                 line }),
    }
}
