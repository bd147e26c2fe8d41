use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Shifts the token window by one, pulling a fresh token from the lexer.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<()> {
        let next = self.lexer.next_token()?;
        self.current = std::mem::replace(&mut self.peek, next);
        Ok(())
    }

    /// Whether the current token is of the given kind.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Returns
    /// The consumed token.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` naming `kind` if the current token differs.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if !self.check(kind) {
            return Err(self.unexpected(kind.to_string()));
        }

        let token = self.current.clone();
        self.advance()?;
        Ok(token)
    }

    /// Consumes an identifier and returns its text.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self) -> ParseResult<String> {
        self.expect(TokenKind::Identifier).map(|token| token.text)
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.into(),
                                      found:    self.current.kind.to_string(),
                                      text:     self.current.text.clone(),
                                      line:     self.current.line, }
    }

    /// Requires at least one newline, then consumes any further blank lines.
    ///
    /// Every statement ends here.
    pub(in crate::interpreter::parser) fn newlines(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::NewLine)?;
        self.skip_newlines()
    }

    /// Consumes zero or more newlines.
    pub(in crate::interpreter::parser) fn skip_newlines(&mut self) -> ParseResult<()> {
        while self.check(TokenKind::NewLine) {
            self.advance()?;
        }
        Ok(())
    }

    /// Adds `name` to the declared-names set.
    pub(in crate::interpreter::parser) fn declare(&mut self, name: &str) {
        self.declared.insert(name.to_string());
    }

    /// Checks that `name` was declared earlier in the source.
    ///
    /// # Errors
    /// Returns `UndeclaredVariable` otherwise.
    pub(in crate::interpreter::parser) fn require_declared(&self,
                                                           name: &str,
                                                           line: usize)
                                                           -> ParseResult<()> {
        if self.declared.contains(name) {
            Ok(())
        } else {
            Err(ParseError::UndeclaredVariable { name: name.to_string(),
                                                 line })
        }
    }

    /// Parses a comma-separated list of items up to a closing token.
    ///
    /// Shared by array literals, call arguments and parameter lists. The
    /// current token must be the first item or the closing token. A trailing
    /// comma before the closing token is accepted, and an immediately
    /// encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token kind that terminates the list.
    /// - `parse_item`: Parses one element.
    ///
    /// # Returns
    /// The parsed items, with the closing token consumed.
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or a token other than
    /// `,` or `closing` follows an item.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        closing: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        loop {
            if self.check(closing) {
                self.advance()?;
                return Ok(items);
            }

            items.push(parse_item(self)?);

            if self.check(TokenKind::Comma) {
                self.advance()?;
            } else if !self.check(closing) {
                return Err(self.unexpected(format!("',' or {closing}")));
            }
        }
    }
}
