//! Expression parser implementation.

use tracing::{debug, trace};

use super::error::ParseError;
use super::precedence::Precedence;
use crate::cursor::Cursor;
use crate::lexer::{Operator, Token};
use crate::tree::TreeNode;

/// An abstract syntax tree: operators on internal nodes, literals on leaves.
pub type Ast = TreeNode<Token>;

const EXPECTED_OPERAND: &str = "literal or '('";

/// Precedence-climbing parser over a token stream.
pub struct Parser {
    cursor: Cursor<Token>,
    /// Prefix operators and open parentheses enclosing the current token.
    depth: usize,
}

impl Parser {
    /// Maximum nesting of prefix operators and parentheses.
    ///
    /// Each level costs a handful of stack frames, so deeper input is
    /// rejected with `ParseError::TooDeep` instead of overflowing the stack.
    pub const MAX_DEPTH: usize = 128;

    /// Creates a new parser for the given tokens.
    #[must_use]
    pub fn new(tokens: impl Into<Vec<Token>>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            depth: 0,
        }
    }

    /// Parses the whole token stream as a single expression.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the stream is not exactly one valid
    /// expression.
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let root = self.parse_expression()?;

        if let Some(&found) = self.cursor.peek() {
            return Err(ParseError::TrailingToken {
                found,
                position: self.cursor.position(),
            });
        }

        debug!(depth = root.depth(), "parsed expression");
        Ok(root)
    }

    /// Parses one expression starting at the current token.
    ///
    /// Tokens after the expression are left unread.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if no valid expression starts here.
    pub fn parse_expression(&mut self) -> Result<Ast, ParseError> {
        self.parse_tier(Precedence::LOWEST)
    }

    fn parse_tier(&mut self, tier: Precedence) -> Result<Ast, ParseError> {
        match tier.tighter() {
            Some(operand) => self.parse_binary(tier, operand),
            None => self.parse_unary(),
        }
    }

    /// Parses `operand ( op operand )*`, folding to the left.
    fn parse_binary(&mut self, tier: Precedence, operand: Precedence) -> Result<Ast, ParseError> {
        let mut lhs = self.parse_tier(operand)?;

        while let Some(&op) = self.cursor.advance_if_any(tier.operators()) {
            let rhs = self.parse_tier(operand)?;
            trace!(%op, ?tier, "fold");
            lhs = TreeNode::with_children(op, [lhs, rhs]);
        }

        Ok(lhs)
    }

    /// Opens one nesting level for the token at `position`.
    const fn enter(&mut self, position: usize) -> Result<(), ParseError> {
        if self.depth >= Self::MAX_DEPTH {
            return Err(ParseError::TooDeep {
                limit: Self::MAX_DEPTH,
                position,
            });
        }
        self.depth += 1;
        Ok(())
    }

    const fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses a prefix operator applied to a unary, or a primary.
    fn parse_unary(&mut self) -> Result<Ast, ParseError> {
        let position = self.cursor.position();
        if let Some(&op) = self.cursor.advance_if_any(Precedence::Unary.operators()) {
            self.enter(position)?;
            let operand = self.parse_unary();
            self.leave();
            return Ok(TreeNode::with_children(op, [operand?]));
        }

        self.parse_primary()
    }

    /// Parses a literal or a parenthesized expression.
    fn parse_primary(&mut self) -> Result<Ast, ParseError> {
        let position = self.cursor.position();
        let Some(&token) = self.cursor.advance() else {
            return Err(ParseError::UnexpectedEnd {
                expected: EXPECTED_OPERAND,
            });
        };

        match token {
            Token::Literal(_) => Ok(TreeNode::new(token)),
            Token::Operator(Operator::LeftParen) => {
                self.enter(position)?;
                let inner = self.parse_expression();
                self.leave();
                let inner = inner?;
                self.cursor.consume(
                    &Token::Operator(Operator::RightParen),
                    "Expected ')' after expression",
                )?;
                Ok(TreeNode::with_children(token, [inner]))
            }
            found => Err(ParseError::UnexpectedToken {
                expected: EXPECTED_OPERAND,
                found,
                position,
            }),
        }
    }
}

/// Parses `tokens` into an AST.
///
/// # Errors
///
/// Returns a `ParseError` if the tokens do not form exactly one
/// expression.
pub fn parse(tokens: impl Into<Vec<Token>>) -> Result<Ast, ParseError> {
    Parser::new(tokens).parse()
}
