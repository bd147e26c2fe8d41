use crate::error::LexError;

#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    Lex(LexError),
    /// Found a token of the wrong kind.
    UnexpectedToken {
        /// The token kind (or kinds) the grammar required here.
        expected: String,
        /// The kind of the token actually found.
        found:    String,
        /// The text of the token actually found.
        text:     String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A variable was referenced before any assignment or binding of it.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A condition was missing its comparison operator.
    ExpectedComparison {
        /// The text of the token found instead.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A condition chained more than one comparison, as in `a < b < c`.
    ChainedComparison {
        /// The source line where the error occurred.
        line: usize,
    },
    /// No statement starts with this token.
    InvalidStatement {
        /// The kind of the offending token.
        found: String,
        /// The text of the offending token.
        text:  String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `var [] name = ...` was not initialized with an array literal.
    ExpectedArrayLiteral {
        /// The name being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number literal could not be converted to a floating-point value.
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),

            Self::UnexpectedToken { expected,
                                    found,
                                    text,
                                    line, } => write!(f,
                                                      "Error on line {line}: Expected {expected}, got {found} '{}' instead.",
                                                      text.escape_debug()),

            Self::UndeclaredVariable { name, line } => write!(f,
                                                              "Error on line {line}: Referencing variable before assignment: {name}."),

            Self::ExpectedComparison { text, line } => write!(f,
                                                              "Error on line {line}: Expected comparison operator at '{}'.",
                                                              text.escape_debug()),

            Self::ChainedComparison { line } => write!(f,
                                                       "Error on line {line}: Comparisons cannot be chained, combine them with nested ifs instead."),

            Self::InvalidStatement { found, text, line } => write!(f,
                                                                   "Error on line {line}: Invalid statement at '{}' ({found}).",
                                                                   text.escape_debug()),

            Self::ExpectedArrayLiteral { name, line } => write!(f,
                                                                "Error on line {line}: Array declaration '{name}' must be initialized with an array literal."),

            Self::InvalidNumber { text, line } => {
                write!(f, "Error on line {line}: Invalid number literal '{text}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
