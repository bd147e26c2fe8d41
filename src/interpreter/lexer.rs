use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Punctuation, operators and keywords are matched literally; two-character
/// operators win over their one-character prefixes because the lexer always
/// takes the longest match. Alphabetic runs that are not keywords become
/// identifiers.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenKind {
    /// End of input. Never matched by the scanner itself; produced by
    /// [`Lexer::next_token`] once the source is exhausted.
    EndOfInput,
    /// `\n`, the statement separator.
    #[token("\n")]
    NewLine,
    /// Number literals such as `42` or `3.25`.
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_number)]
    Number,
    /// String literals such as `"hello"`.
    #[token("\"", lex_string)]
    String,
    /// Identifiers; variable or function names such as `total`.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `elseif`
    #[token("elseif")]
    ElseIf,
    /// `else`
    #[token("else")]
    Else,
    /// `end`
    #[token("end")]
    End,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `while`
    #[token("while")]
    While,
    /// `each`
    #[token("each")]
    Each,
    /// `in`
    #[token("in")]
    In,
    /// `var`
    #[token("var")]
    Var,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `% Comments.`
    #[regex(r"%[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::EndOfInput => "end of input",
            Self::NewLine => "newline",
            Self::Number => "number",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::PlusAssign => "'+='",
            Self::MinusAssign => "'-='",
            Self::StarAssign => "'*='",
            Self::SlashAssign => "'/='",
            Self::PlusPlus => "'++'",
            Self::MinusMinus => "'--'",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::Equals => "'='",
            Self::If => "'if'",
            Self::Then => "'then'",
            Self::ElseIf => "'elseif'",
            Self::Else => "'else'",
            Self::End => "'end'",
            Self::Repeat => "'repeat'",
            Self::While => "'while'",
            Self::Each => "'each'",
            Self::In => "'in'",
            Self::Var => "'var'",
            Self::Function => "'function'",
            Self::Return => "'return'",
            Self::Comment => "comment",
            Self::Ignored => "whitespace",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: the matched text, its kind and where it was found.
///
/// For string literals `text` excludes the surrounding quotes; for every
/// other kind it is the exact source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text.
    pub text: String,
    /// The classified kind.
    pub kind: TokenKind,
    /// The 1-based source line the token starts on.
    pub line: usize,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Pull-based tokenizer over one source buffer.
///
/// Tokens are produced one at a time by [`Lexer::next_token`], so the parser
/// drives lexing on demand. The source behaves as if a newline had been
/// appended to it, which guarantees that the final statement is terminated.
///
/// # Example
/// ```
/// use rill::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds = Lexer::new("x += 2").map(|token| token.map(|t| t.kind))
///                                  .collect::<Result<Vec<_>, _>>()
///                                  .unwrap();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::PlusAssign,
///             TokenKind::Number,
///             TokenKind::NewLine,
///             TokenKind::EndOfInput]);
/// ```
pub struct Lexer<'src> {
    inner:            logos::Lexer<'src, TokenKind>,
    trailing_newline: bool,
    done:             bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:            TokenKind::lexer(source),
               trailing_newline: false,
               done:             false, }
    }

    /// Returns the next token.
    ///
    /// Once the source is exhausted an [`TokenKind::EndOfInput`] token is
    /// returned, and keeps being returned on further calls.
    ///
    /// # Errors
    /// Returns a [`LexError`] for malformed string or number literals and for
    /// characters that start no token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.inner.extras.line;

        match self.inner.next() {
            Some(Ok(kind)) => {
                let slice = self.inner.slice();
                let text = if kind == TokenKind::String {
                    slice.strip_prefix('"')
                         .and_then(|s| s.strip_suffix('"'))
                         .unwrap_or(slice)
                } else {
                    slice
                };

                if kind == TokenKind::NewLine {
                    self.inner.extras.line += 1;
                }

                Ok(Token { text: text.to_string(),
                           kind,
                           line })
            },
            Some(Err(LexError::UnrecognizedCharacter { .. })) => {
                Err(LexError::UnrecognizedCharacter { text: self.inner.slice().to_string(),
                                                      line })
            },
            Some(Err(e)) => Err(e),
            None if !self.trailing_newline => {
                self.trailing_newline = true;
                Ok(Token { text: "\n".to_string(),
                           kind: TokenKind::NewLine,
                           line })
            },
            None => Ok(Token { text: String::new(),
                               kind: TokenKind::EndOfInput,
                               line }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields every token up to and including a single end-of-input token,
    /// or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.next_token();
        self.done = !matches!(&token, Ok(t) if t.kind != TokenKind::EndOfInput);
        Some(token)
    }
}

/// Rejects a number literal whose decimal point is not followed by a digit.
///
/// The number pattern accepts `12.` so that the malformed literal is reported
/// here instead of silently lexing as `12` followed by `.`.
fn lex_number(lex: &logos::Lexer<TokenKind>) -> Result<(), LexError> {
    let slice = lex.slice();
    if slice.ends_with('.') {
        return Err(LexError::MalformedNumber { text: slice.to_string(),
                                               line: lex.extras.line, });
    }
    Ok(())
}

/// Scans the body of a string literal after its opening quote.
///
/// Advances the lexer past the closing quote. Control characters, `\` and
/// the comment marker `%` are not allowed inside strings.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    let line = lex.extras.line;
    let remainder = lex.remainder();

    for (offset, character) in remainder.char_indices() {
        if character == '"' {
            lex.bump(offset + 1);
            return Ok(());
        }
        if character.is_control() || matches!(character, '\\' | '%') {
            lex.bump(offset);
            return Err(LexError::IllegalCharacterInString { character, line });
        }
    }

    lex.bump(remainder.len());
    Err(LexError::UnterminatedString { line })
}
