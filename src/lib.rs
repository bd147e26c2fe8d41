//! # rill
//!
//! rill is a small imperative scripting language written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree and
//! executed directly by a tree-walking evaluator. The language has numbers,
//! strings, booleans and arrays, conditionals, three kinds of loops and
//! user-defined functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::Error,
    interpreter::{evaluator::core::Context, parser::core::Parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement nodes for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines one error enum per phase plus a crate-level `Error`.
/// - Renders errors as `Error on line N: ...` messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `f64`, `i64` and `usize` without silent data
///   loss.
/// - Check indices against lengths.
pub mod util;

/// Parses source text into a [`Program`] without running it.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` for the first problem found.
///
/// # Examples
/// ```
/// use rill::parse;
///
/// let program = parse("x = 5\nprintln(x)").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// // 'x' is referenced before anything assigned it.
/// assert!(parse("println(x)\nx = 5").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    Ok(Parser::new(source)?.parse()?)
}

/// Parses and runs a program in a fresh context writing to standard output.
///
/// # Returns
/// The value of the last statement that produced one.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use rill::{interpreter::value::core::Value, run};
///
/// let result = run("total = 2 + 3 * 4").unwrap();
/// assert_eq!(result, Some(Value::Number(14.0)));
///
/// assert!(run("x = 5 / 0").is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, Error> {
    run_with_context(&mut Context::new(), source)
}

/// Parses and runs a program in an existing context.
///
/// Variables and functions left behind by earlier runs in the same context
/// remain available at run time, but the parser only knows the names
/// assigned in `source` itself.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
pub fn run_with_context(context: &mut Context, source: &str) -> Result<Option<Value>, Error> {
    let program = parse(source)?;
    Ok(context.evaluate(&program)?)
}
