//! Scanner error types.

use super::Span;

/// A scan error. Scanning stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A character outside every recognized class.
    #[error("Unknown character '{character}' at position {span}")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        span: Span,
    },

    /// A run that looks like a literal or word but is not a valid one.
    #[error("Invalid literal '{text}' at position {span}")]
    InvalidLiteral {
        /// The text of the run.
        text: String,
        /// Where the run was found.
        span: Span,
    },
}

impl ScanError {
    /// Returns the location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnknownCharacter { span, .. } | Self::InvalidLiteral { span, .. } => *span,
        }
    }
}
