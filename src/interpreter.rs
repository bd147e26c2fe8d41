/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser and runs it directly,
/// with no intermediate compilation step. All mutable state of a run lives in
/// one `Context`.
///
/// # Responsibilities
/// - Evaluates every AST node variant through one exhaustive `match`.
/// - Manages the global scope, call frames and user-defined functions.
/// - Provides the builtin function table and the value method tables.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens on demand, each corresponding to meaningful language elements such
/// as numbers, strings, identifiers, operators, newlines, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source line.
/// - Skips whitespace and `%` comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// constructs a `Program` by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into AST nodes for expressions and statements.
/// - Rejects references to variables that were never assigned earlier in
///   the source.
/// - Validates correct grammar and syntax, reporting errors with line info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: numbers,
/// strings, booleans and arrays. It also provides their display form,
/// truthiness, ordering and per-type method tables.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements comparison, indexing and iteration over values.
/// - Dispatches method calls such as `values.push(x)`.
pub mod value;
