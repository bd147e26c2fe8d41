/// Core evaluation logic and context management.
///
/// Contains the runtime context, the program entry point and the dispatch
/// over every AST node variant.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic (including string and array concatenation and
/// repetition) and the six comparison operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix `+` and `-` on numbers.
pub mod unary;

/// Evaluation of conditionals and loops.
///
/// Runs `if` chains, `repeat`, `while` and `each`, and manages the loop
/// variable of `each`.
pub mod control_flow;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, call
/// frames and return values.
pub mod function;

/// Method call evaluation.
///
/// Resolves the receiver variable and hands the call to the value's method
/// table.
pub mod method;

/// Utility functions for evaluation.
///
/// Scope lookups and updates, and helpers shared by builtins and methods.
pub mod utils;
