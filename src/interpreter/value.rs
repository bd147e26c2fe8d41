/// Runtime values.
///
/// Defines the `Value` enum, its display form, truthiness, structural
/// equality and the ordering used by comparison operators.
pub mod core;
/// Method tables.
///
/// Each value variant exposes a fixed, closed set of methods, called with
/// `receiver.method(args)` in source code. Dispatch is a `match` on the
/// variant and the method name; nothing is looked up reflectively.
pub mod method;
