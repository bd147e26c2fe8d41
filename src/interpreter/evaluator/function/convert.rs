use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::check_arity,
        },
        value::core::Value,
    },
};

/// Returns the number of characters in a string or elements in an array.
///
/// # Example
/// ```
/// use rill::interpreter::{
///     evaluator::{core::Context, function::convert::len},
///     value::core::Value,
/// };
///
/// let mut context = Context::new();
/// let n = len(&mut context, &[Value::from("héllo")], 1).unwrap();
///
/// assert_eq!(n, Some(Value::Number(5.0)));
/// ```
pub fn len(_: &mut Context, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let [value] = check_arity::<1>("len", args, line)?;
    value.length_value(line).map(Some)
}

/// Converts any value to its display string.
pub fn str(_: &mut Context, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let [value] = check_arity::<1>("str", args, line)?;
    Ok(Some(Value::from(value.to_string())))
}

/// Parses a string as a number. Numbers are returned unchanged.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// - `InvalidArgument` if the string is not a number.
/// - `TypeError` for booleans and arrays.
pub fn num(_: &mut Context, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let [value] = check_arity::<1>("num", args, line)?;

    match value {
        Value::Number(n) => Ok(Some(Value::Number(*n))),
        Value::String(s) => {
            let n = s.trim()
                     .parse::<f64>()
                     .map_err(|_| RuntimeError::InvalidArgument { details: format!("'{s}' is not a number"),
                                                                  line })?;
            Ok(Some(Value::Number(n)))
        },
        _ => Err(RuntimeError::TypeError { details: format!("Cannot convert {} to a number",
                                                            value.type_name()),
                                           line }),
    }
}
