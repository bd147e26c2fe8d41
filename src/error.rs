/// Lexing errors.
///
/// Raised while turning source text into tokens: malformed string or number
/// literals and characters that start no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens, references to undeclared variables and malformed
/// grammar constructs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, unknown names, out of range indices or argument count
/// mismatches.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts a program run.
///
/// Every phase has its own error type; this enum is what the top-level
/// entry points hand back to the caller.
#[derive(Debug)]
pub enum Error {
    /// The source could not be tokenized.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(error) => Self::Lex(error),
            other => Self::Parse(other),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Lexing error. {e}"),
            Self::Parse(e) => write!(f, "Parse error. {e}"),
            Self::Runtime(e) => write!(f, "Runtime error. {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
