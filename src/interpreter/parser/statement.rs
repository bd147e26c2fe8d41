use crate::{
    ast::{AssignOperator, Call, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement and the newline(s) ending it.
    ///
    /// A statement may be one of:
    /// - a conditional (`if`),
    /// - a variable declaration (`var`),
    /// - a loop (`repeat`, `while`, `each`),
    /// - a function definition (`function`),
    /// - an assignment, function call or method call starting with an
    ///   identifier.
    ///
    /// # Errors
    /// Returns `InvalidStatement` if no statement starts at the current token,
    /// and `UnexpectedToken` if the statement is not followed by a newline.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Node> {
        let statement = match self.current.kind {
            TokenKind::If => self.parse_if()?,
            TokenKind::Var => self.parse_variable_declaration()?,
            TokenKind::Repeat => self.parse_repeat()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Each => self.parse_each()?,
            TokenKind::Function => self.parse_function_definition()?,
            TokenKind::Identifier => self.parse_identifier_statement()?,
            _ => {
                return Err(ParseError::InvalidStatement { found: self.current.kind.to_string(),
                                                          text:  self.current.text.clone(),
                                                          line:  self.current.line, });
            },
        };

        self.newlines()?;
        Ok(statement)
    }

    /// Parses a variable declaration.
    ///
    /// A declaration has the form `var <identifier> = <expression>`, or
    /// `var [] <identifier> = <array literal>` for arrays. It behaves exactly
    /// like a plain assignment.
    ///
    /// # Errors
    /// - `ExpectedArrayLiteral` if the `[]` marker is present but the
    ///   initializer does not start with `[`.
    /// - `UnexpectedToken` if the name or `=` is missing.
    fn parse_variable_declaration(&mut self) -> ParseResult<Node> {
        let line = self.expect(TokenKind::Var)?.line;

        let array_marker = self.check(TokenKind::LBracket);
        if array_marker {
            self.advance()?;
            self.expect(TokenKind::RBracket)?;
        }

        let target = self.expect_identifier()?;
        self.expect(TokenKind::Equals)?;

        let value = if array_marker {
            if !self.check(TokenKind::LBracket) {
                return Err(ParseError::ExpectedArrayLiteral { name: target,
                                                              line });
            }
            self.parse_array()?
        } else {
            self.parse_expression()?
        };
        self.declare(&target);

        Ok(Node::Assign { target,
                          op: AssignOperator::Set,
                          value: Some(Box::new(value)),
                          line })
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// The token after the identifier decides the form: an assignment
    /// operator, `(` for a function call, or `.` for a method call.
    fn parse_identifier_statement(&mut self) -> ParseResult<Node> {
        match self.peek.kind {
            TokenKind::LParen => self.parse_call().map(Node::CallFunction),
            TokenKind::Dot => self.parse_method_call(),
            kind if assignment_operator(kind).is_some() => self.parse_assignment(),
            _ => {
                self.advance()?;
                Err(self.unexpected("assignment, '.' or '('"))
            },
        }
    }

    /// Parses `name <op> expression`, `name++` or `name--`.
    ///
    /// A plain `=` declares `name` only after the right-hand side has been
    /// parsed, so `x = x + 1` is rejected when `x` is new. Compound operators
    /// and `++`/`--` read the target and require it to be declared already.
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let line = self.current.line;
        let target = self.expect_identifier()?;

        let Some(op) = assignment_operator(self.current.kind) else {
            return Err(self.unexpected("assignment operator"));
        };
        self.advance()?;

        let value = match op {
            AssignOperator::Set => {
                let value = self.parse_expression()?;
                self.declare(&target);
                Some(Box::new(value))
            },
            AssignOperator::Increment | AssignOperator::Decrement => {
                self.require_declared(&target, line)?;
                None
            },
            _ => {
                self.require_declared(&target, line)?;
                Some(Box::new(self.parse_expression()?))
            },
        };

        Ok(Node::Assign { target,
                          op,
                          value,
                          line })
    }

    /// Parses `name(arguments)`.
    ///
    /// The name is not checked against anything: functions are resolved when
    /// the call runs, so a function may be called before its definition
    /// appears in the source.
    pub(in crate::interpreter::parser) fn parse_call(&mut self) -> ParseResult<Call> {
        let line = self.current.line;
        let name = self.expect_identifier()?;

        self.expect(TokenKind::LParen)?;
        let arguments = self.parse_comma_separated(TokenKind::RParen, Self::parse_expression)?;

        Ok(Call { name,
                  arguments,
                  line })
    }

    /// Parses `receiver.method(arguments)`. The receiver must be declared.
    pub(in crate::interpreter::parser) fn parse_method_call(&mut self) -> ParseResult<Node> {
        let line = self.current.line;
        let receiver = self.expect_identifier()?;
        self.require_declared(&receiver, line)?;

        self.expect(TokenKind::Dot)?;
        let call = self.parse_call()?;

        Ok(Node::CallMethod { receiver,
                              call,
                              line })
    }
}

/// Maps a token kind to the assignment operator it spells, if any.
const fn assignment_operator(kind: TokenKind) -> Option<AssignOperator> {
    match kind {
        TokenKind::Equals => Some(AssignOperator::Set),
        TokenKind::PlusAssign => Some(AssignOperator::Add),
        TokenKind::MinusAssign => Some(AssignOperator::Sub),
        TokenKind::StarAssign => Some(AssignOperator::Mul),
        TokenKind::SlashAssign => Some(AssignOperator::Div),
        TokenKind::PlusPlus => Some(AssignOperator::Increment),
        TokenKind::MinusMinus => Some(AssignOperator::Decrement),
        _ => None,
    }
}
