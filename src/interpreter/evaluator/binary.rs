/// Operator dispatch.
pub mod core;

/// `+`, `-`, `*` and `/` on numbers, plus concatenation and repetition of
/// strings and arrays.
pub mod arithmetic;

/// Equality and ordering comparisons.
pub mod comparison;
