use rand::Rng;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::check_arity,
        },
        value::core::Value,
    },
    util::num::{i64_to_f64_checked, truncate_to_i64},
};

/// Returns a random integer between two bounds, both inclusive.
///
/// The bounds are truncated towards zero before drawing. The generator is
/// the context's own, so a context built with
/// [`Context::with_seed`] yields a reproducible sequence.
///
/// # Errors
/// - `TypeError` if a bound is not a number.
/// - `InvalidArgument` if the lower bound exceeds the upper bound.
///
/// # Example
/// ```
/// use rill::interpreter::{
///     evaluator::{core::Context, function::random::random},
///     value::core::Value,
/// };
///
/// let mut context = Context::new().with_seed(7);
/// let drawn = random(&mut context, &[Value::Number(1.0), Value::Number(6.0)], 1).unwrap()
///                                                                              .unwrap();
///
/// let n = drawn.as_number(1).unwrap();
/// assert!((1.0..=6.0).contains(&n) && n.fract() == 0.0);
/// ```
pub fn random(context: &mut Context, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let [low, high] = check_arity::<2>("random", args, line)?;

    let low = truncate_to_i64(low.as_number(line)?, line)?;
    let high = truncate_to_i64(high.as_number(line)?, line)?;

    if low > high {
        return Err(RuntimeError::InvalidArgument { details: format!("random() lower bound {low} exceeds upper bound {high}"),
                                                   line });
    }

    let drawn = context.rng.gen_range(low..=high);
    Ok(Some(Value::Number(i64_to_f64_checked(drawn, line)?)))
}
