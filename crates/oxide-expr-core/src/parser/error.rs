//! Parser error types.

use crate::cursor::ConsumeError;
use crate::lexer::Token;

/// A parse error. Parsing stops at the first one and yields no tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The token stream ended where an operand was required.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A token that cannot start an operand.
    #[error("Unexpected token: expected {expected}, found '{found}' at token {position}")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// The token actually found.
        found: Token,
        /// Index of the token in the stream.
        position: usize,
    },

    /// A mandatory token, such as a closing parenthesis, is absent.
    #[error("{message} at token {position}")]
    MissingToken {
        /// Description of the missing token.
        message: String,
        /// Index at which it was expected.
        position: usize,
    },

    /// Tokens remain after a complete expression.
    #[error("Unexpected trailing token '{found}' at token {position}")]
    TrailingToken {
        /// The first leftover token.
        found: Token,
        /// Index of the token in the stream.
        position: usize,
    },

    /// Prefix operators and parentheses are nested deeper than the parser
    /// allows.
    #[error("Expression nested deeper than {limit} levels at token {position}")]
    TooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
        /// Index of the token that opened the excess level.
        position: usize,
    },
}

impl ParseError {
    /// Returns the token index the error points at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEnd { .. } => None,
            Self::UnexpectedToken { position, .. }
            | Self::MissingToken { position, .. }
            | Self::TrailingToken { position, .. }
            | Self::TooDeep { position, .. } => Some(*position),
        }
    }
}

impl From<ConsumeError> for ParseError {
    fn from(err: ConsumeError) -> Self {
        Self::MissingToken {
            message: err.message,
            position: err.position,
        }
    }
}
