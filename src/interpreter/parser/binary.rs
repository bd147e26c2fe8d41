use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comparison: exactly one comparison operator between two
    /// expressions.
    ///
    /// Conditions of `if`, `elseif` and `while` are parsed here. Comparisons
    /// do not associate, so a second operator after the right-hand side is
    /// rejected rather than silently grouped.
    ///
    /// Grammar: `comparison := expression ("==" | "!=" | "<" | "<=" | ">" |
    /// ">=") expression`
    ///
    /// # Returns
    /// A `Node::BinOp` with a comparison operator.
    ///
    /// # Errors
    /// - `ExpectedComparison` if no comparison operator follows the left side.
    /// - `ChainedComparison` for input such as `a < b < c`.
    pub fn parse_comparison(&mut self) -> ParseResult<Node> {
        let left = self.parse_expression()?;

        let Some(op) = token_to_binary_operator(self.current.kind).filter(|op| op.is_comparison())
        else {
            return Err(ParseError::ExpectedComparison { text: self.current.text.clone(),
                                                        line: self.current.line, });
        };
        let line = self.current.line;
        self.advance()?;

        let right = self.parse_expression()?;

        if token_to_binary_operator(self.current.kind).is_some_and(BinaryOperator::is_comparison) {
            return Err(ParseError::ChainedComparison { line: self.current.line });
        }

        Ok(Node::BinOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// A `Node::BinOp` tree, or the single term if no operator follows.
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;

        while let Some(op) = token_to_binary_operator(self.current.kind)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = self.current.line;
            self.advance()?;

            let right = self.parse_term()?;
            left = Node::BinOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 line };
        }

        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `term := unary (("*" | "/") unary)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_unary()?;

        while let Some(op) = token_to_binary_operator(self.current.kind)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = self.current.line;
            self.advance()?;

            let right = self.parse_unary()?;
            left = Node::BinOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 line };
        }

        Ok(left)
    }
}

/// Maps a token kind to its binary operator.
///
/// Returns `None` for tokens that are not binary operators, including the
/// compound assignment operators.
///
/// # Example
/// ```
/// use rill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::LessEqual), Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::PlusAssign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
