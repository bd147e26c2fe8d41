use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix `+` and `-`.
    ///
    /// Signs nest, so `- + 3` is accepted. Note that `--` lexes as the
    /// decrement operator and is therefore not a double negation.
    ///
    /// The rule is: `unary := ("+" | "-") unary | primary`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Node> {
        let op = match self.current.kind {
            TokenKind::Plus => UnaryOperator::Plus,
            TokenKind::Minus => UnaryOperator::Negate,
            _ => return self.parse_primary(),
        };
        let line = self.current.line;
        self.advance()?;

        let operand = self.parse_unary()?;

        Ok(Node::UnaryOp { op,
                           operand: Box::new(operand),
                           line })
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    /// primary := NUMBER | STRING | "(" expression ")" | array
    ///          | IDENT "(" args ")" | IDENT "[" expression "]"
    ///          | IDENT "." IDENT "(" args ")" | IDENT
    /// ```
    ///
    /// Identifiers are disambiguated by the token after them. Variables,
    /// indexed names and method receivers must already be declared; called
    /// function names are resolved at run time.
    ///
    /// # Errors
    /// - `UnexpectedToken` if no expression starts at the current token.
    /// - `UndeclaredVariable` for references to undeclared names.
    /// - `InvalidNumber` if a number literal cannot be represented.
    fn parse_primary(&mut self) -> ParseResult<Node> {
        let line = self.current.line;

        match self.current.kind {
            TokenKind::Number => {
                let value =
                    self.current
                        .text
                        .parse::<f64>()
                        .map_err(|_| ParseError::InvalidNumber { text: self.current.text.clone(),
                                                                 line })?;
                self.advance()?;

                Ok(Node::Num { value, line })
            },

            TokenKind::String => {
                let value = self.current.text.clone();
                self.advance()?;

                Ok(Node::String { value, line })
            },

            TokenKind::LParen => {
                self.advance()?;
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;

                Ok(inner)
            },

            TokenKind::LBracket => self.parse_array(),

            TokenKind::Identifier => match self.peek.kind {
                TokenKind::LParen => self.parse_call().map(Node::CallFunction),
                TokenKind::LBracket => self.parse_index(),
                TokenKind::Dot => self.parse_method_call(),
                _ => {
                    let name = self.current.text.clone();
                    self.require_declared(&name, line)?;
                    self.advance()?;

                    Ok(Node::Var { name, line })
                },
            },

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses an array literal such as `[1, 2, 3]`.
    ///
    /// Elements may be any expression. A trailing comma is allowed and `[]`
    /// is the empty array.
    ///
    /// Grammar: `array := "[" (expression ("," expression)* ","?)? "]"`
    pub(in crate::interpreter::parser) fn parse_array(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::LBracket)?.line;
        let elements = self.parse_comma_separated(TokenKind::RBracket, Self::parse_expression)?;

        Ok(Node::Array { elements, line })
    }

    /// Parses `name[index]`.
    fn parse_index(&mut self) -> ParseResult<Node> {
        let line = self.current.line;
        let name = self.expect_identifier()?;
        self.require_declared(&name, line)?;

        self.expect(TokenKind::LBracket)?;
        let index = self.parse_expression()?;
        self.expect(TokenKind::RBracket)?;

        Ok(Node::CallArray { name,
                             index: Box::new(index),
                             line })
    }
}
