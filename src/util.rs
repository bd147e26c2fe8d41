/// Numeric conversion helpers.
///
/// The language has a single floating-point number type, but counts,
/// indices and random bounds are integers. The helpers here truncate and
/// range-check those conversions so that a bad value becomes a
/// `RuntimeError` rather than a silent wrap-around or a panic.
pub mod num;
