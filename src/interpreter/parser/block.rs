use std::rc::Rc;

use crate::{
    ast::{FunctionDef, If, Node},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a statement body after its `then`.
    ///
    /// The body starts on a new line and runs until the matching `end`,
    /// which is consumed. Empty bodies are allowed.
    ///
    /// Grammar: `block := newline+ statement* "end"`
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the input ends before `end`.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Vec<Node>> {
        self.newlines()?;

        let mut body = Vec::new();
        while !self.check(TokenKind::End) {
            if self.check(TokenKind::EndOfInput) {
                return Err(self.unexpected(TokenKind::End.to_string()));
            }
            body.push(self.parse_statement()?);
        }
        self.advance()?;

        Ok(body)
    }

    /// Parses a conditional with optional `elseif` and `else` arms.
    ///
    /// Syntax:
    /// ```text
    ///     if <comparison> then
    ///         ...
    ///     end elseif <comparison> then
    ///         ...
    ///     end
    ///     else then
    ///         ...
    ///     end
    /// ```
    /// A follow-up arm may start on the same line as the previous `end` or on
    /// the line right after it. The `else` arm, if present, is always last.
    ///
    /// # Returns
    /// A `Node::Conditional` holding the `if` arm, every `elseif` arm in
    /// order, and the optional `else` arm.
    pub(in crate::interpreter::parser) fn parse_if(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::If)?.line;

        let mut cases = vec![self.parse_arm(line, true)?];
        let mut else_case = None;

        loop {
            if self.check(TokenKind::NewLine)
               && matches!(self.peek.kind, TokenKind::ElseIf | TokenKind::Else)
            {
                self.advance()?;
            }

            let arm_line = self.current.line;
            match self.current.kind {
                TokenKind::ElseIf => {
                    self.advance()?;
                    cases.push(self.parse_arm(arm_line, true)?);
                },
                TokenKind::Else => {
                    self.advance()?;
                    else_case = Some(Box::new(self.parse_arm(arm_line, false)?));
                    break;
                },
                _ => break,
            }
        }

        Ok(Node::Conditional { cases,
                               else_case,
                               line })
    }

    /// Parses one arm after its keyword: the optional comparison, `then`
    /// and the body.
    fn parse_arm(&mut self, line: usize, has_condition: bool) -> ParseResult<If> {
        let condition = if has_condition {
            Some(self.parse_comparison()?)
        } else {
            None
        };

        self.expect(TokenKind::Then)?;
        let body = self.parse_block()?;

        Ok(If { condition,
                body,
                line })
    }

    /// Parses `repeat <expression> then ... end`.
    pub(in crate::interpreter::parser) fn parse_repeat(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::Repeat)?.line;

        let count = self.parse_expression()?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_block()?;

        Ok(Node::Repeat { count: Box::new(count),
                          body,
                          line })
    }

    /// Parses `while <comparison> then ... end`.
    pub(in crate::interpreter::parser) fn parse_while(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::While)?.line;

        let condition = self.parse_comparison()?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_block()?;

        Ok(Node::While { condition: Box::new(condition),
                         body,
                         line })
    }

    /// Parses `each <name> in <expression> then ... end`.
    ///
    /// The loop variable is declared before the iterable and the body are
    /// parsed.
    pub(in crate::interpreter::parser) fn parse_each(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::Each)?.line;

        let iterator = self.expect_identifier()?;
        self.declare(&iterator);
        self.expect(TokenKind::In)?;

        let iterable = self.parse_expression()?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_block()?;

        Ok(Node::Each { iterator,
                        iterable: Box::new(iterable),
                        body,
                        line })
    }

    /// Parses a function definition.
    ///
    /// Syntax:
    /// ```text
    ///     function <name>(<param>, ...) then
    ///         ...
    ///         return <expression>
    ///     end
    /// ```
    /// Parameters are declared names from here on. `return` is optional; when
    /// present its expression is the function's result and it must be the
    /// last statement of the body.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if anything other than `end` follows the
    /// `return` statement.
    pub(in crate::interpreter::parser) fn parse_function_definition(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::Function)?.line;

        let name = self.expect_identifier()?;
        self.expect(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(TokenKind::RParen, Self::expect_identifier)?;
        for parameter in &parameters {
            self.declare(parameter);
        }

        self.expect(TokenKind::Then)?;
        self.newlines()?;

        let mut body = Vec::new();
        let mut return_expr = None;
        while !self.check(TokenKind::End) {
            if self.check(TokenKind::EndOfInput) {
                return Err(self.unexpected(TokenKind::End.to_string()));
            }

            if self.check(TokenKind::Return) {
                self.advance()?;
                return_expr = Some(self.parse_expression()?);
                self.newlines()?;

                if !self.check(TokenKind::End) {
                    return Err(self.unexpected(TokenKind::End.to_string()));
                }
                break;
            }

            body.push(self.parse_statement()?);
        }
        self.advance()?;

        Ok(Node::DefineFunction(Rc::new(FunctionDef { name,
                                                      parameters,
                                                      body,
                                                      return_expr,
                                                      line })))
    }
}
