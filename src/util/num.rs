use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Truncates an `f64` towards zero and converts it to `i64`.
///
/// Counts, indices and random bounds are written as numbers in the language
/// but used as integers; this is the single place that conversion happens.
///
/// ## Errors
/// Returns `InvalidArgument` if the value is not finite or does not fit in an
/// `i64` after truncation.
///
/// ## Example
/// ```
/// use rill::{error::RuntimeError, util::num::truncate_to_i64};
///
/// assert_eq!(truncate_to_i64(3.9, 1).unwrap(), 3);
/// assert_eq!(truncate_to_i64(-2.5, 1).unwrap(), -2);
///
/// let err = truncate_to_i64(f64::INFINITY, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { line: 4, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn truncate_to_i64(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("Cannot use non-finite value {value} as an integer"),
                                                   line });
    }

    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is too large to use as an integer"),
                                                   line });
    }
    Ok(truncated as i64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `InvalidArgument` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use rill::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(100, 0).unwrap(), 100.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(RuntimeError::InvalidArgument { details: format!("{value} is too large to represent as a number"),
                                                 line }),
    }
}

/// Checks an integer index against a length and converts it to `usize`.
///
/// Negative indices are out of bounds; they do not count from the end.
///
/// ## Errors
/// Returns `IndexOutOfBounds` if `index < 0` or `index >= len`.
///
/// ## Example
/// ```
/// use rill::{error::RuntimeError, util::num::checked_index};
///
/// assert_eq!(checked_index(2, 3, 1).unwrap(), 2);
/// assert!(matches!(checked_index(3, 3, 1),
///                  Err(RuntimeError::IndexOutOfBounds { len: 3, found: 3, .. })));
/// assert!(checked_index(-1, 3, 1).is_err());
/// ```
pub fn checked_index(index: i64, len: usize, line: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|i| *i < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { len,
                                                                  found: index,
                                                                  line })
}

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `InvalidArgument` if `|value|` exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use rill::util::num::i64_to_f64_checked;
///
/// assert_eq!(i64_to_f64_checked(-7, 0).unwrap(), -7.0);
/// assert!(i64_to_f64_checked(i64::MAX, 0).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64, line: usize) -> EvalResult<f64> {
    if value.unsigned_abs() <= MAX_SAFE_U64_INT {
        Ok(value as f64)
    } else {
        Err(RuntimeError::InvalidArgument { details: format!("{value} is too large to represent as a number"),
                                            line })
    }
}
