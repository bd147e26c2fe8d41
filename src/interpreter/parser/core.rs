use std::collections::HashSet;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a lazily lexed token stream.
///
/// The parser sees two tokens at a time, `current` and `peek`, and pulls the
/// next one from its [`Lexer`] whenever it advances. It never backtracks.
///
/// Alongside the tree it builds, the parser records every name that has been
/// assigned, bound by a loop, or introduced as a function parameter. The set
/// only grows and spans the whole program: a name declared inside one block
/// stays declared for the rest of the source. Referencing a name that is not
/// in the set yet is a parse error.
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) lexer:    Lexer<'src>,
    pub(in crate::interpreter::parser) current:  Token,
    pub(in crate::interpreter::parser) peek:     Token,
    pub(in crate::interpreter::parser) declared: HashSet<String>,
}

impl<'src> Parser<'src> {
    /// Creates a parser for `source` and primes its two-token window.
    ///
    /// # Errors
    /// Returns `ParseError::Lex` if either of the first two tokens fails to
    /// lex.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;

        Ok(Self { lexer,
                  current,
                  peek,
                  declared: HashSet::new() })
    }

    /// Parses the whole source into a [`Program`].
    ///
    /// Leading blank lines are skipped, then statements are parsed until the
    /// end of input. Parsing stops at the first error.
    ///
    /// Grammar: `program := newline* statement*`
    ///
    /// # Returns
    /// The top-level statements in source order.
    ///
    /// # Errors
    /// Returns the first lexing or parsing error encountered.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::parser::core::Parser;
    ///
    /// let program = Parser::new("\n\nx = 1\nx += 2\n").unwrap().parse().unwrap();
    /// assert_eq!(program.statements.len(), 2);
    ///
    /// assert!(Parser::new("println(y)").unwrap().parse().is_err());
    /// ```
    pub fn parse(mut self) -> ParseResult<Program> {
        self.skip_newlines()?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::EndOfInput) {
            statements.push(self.parse_statement()?);
        }

        Ok(Program { statements })
    }
}
