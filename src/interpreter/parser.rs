/// Parser state and the program entry point.
///
/// Holds the `Parser` struct with its two-token window over the lexer and
/// the program-wide set of declared names.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: keywords, assignments,
/// function calls and method calls.
pub mod statement;

/// Block parsing.
///
/// Parses `end`-terminated statement bodies and the compound statements
/// built from them: conditionals, loops and function definitions.
pub mod block;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels and the
/// single, non-associative comparison level.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, literals, parenthesized expressions, array literals,
/// variable references, indexing and calls in expression position.
pub mod unary;

/// Parser helpers.
///
/// Token-window movement, expectation checks, newline handling, declared-name
/// bookkeeping and comma-separated lists.
pub mod utils;
