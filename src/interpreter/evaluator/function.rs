/// Function call dispatch.
///
/// Holds the builtin table, user-defined function registration and the call
/// frame handling for user functions.
pub mod core;

/// The `println` and `print` builtins.
///
/// Write values to the context's output sink.
pub mod print;

/// The `random` builtin.
///
/// Draws a random integer from an inclusive range.
pub mod random;

/// The `len`, `str` and `num` builtins.
///
/// Length queries and conversions between strings and numbers.
pub mod convert;
