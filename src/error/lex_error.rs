#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A string literal contained a character that is not allowed inside it.
    IllegalCharacterInString {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A decimal point was not followed by a digit.
    MalformedNumber {
        /// The literal text up to and including the decimal point.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal reached the end of input without a closing quote.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character that does not start any token.
    ///
    /// This is also the variant the lexer produces by default; the text and
    /// line are filled in afterwards by [`crate::interpreter::lexer::Lexer`].
    UnrecognizedCharacter {
        /// The unrecognized text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl Default for LexError {
    fn default() -> Self {
        Self::UnrecognizedCharacter { text: String::new(),
                                      line: 0, }
    }
}

impl LexError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IllegalCharacterInString { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnrecognizedCharacter { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacterInString { character, line } => write!(f,
                                                                         "Error on line {line}: Illegal character {character:?} in string."),
            Self::MalformedNumber { text, line } => write!(f,
                                                           "Error on line {line}: Illegal character in number '{text}', a decimal point must be followed by a digit."),
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::UnrecognizedCharacter { text, line } => {
                write!(f, "Error on line {line}: Unknown token: {text}")
            },
        }
    }
}

impl std::error::Error for LexError {}
