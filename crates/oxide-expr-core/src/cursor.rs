//! Positional reader shared by the scanner and the parser.
//!
//! A [`Cursor`] owns a finite sequence and a read position. It knows
//! nothing about characters, tokens or grammar: the scanner runs one over
//! `char`s and the parser runs one over [`Token`](crate::Token)s.

/// Failure of [`Cursor::consume`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct ConsumeError {
    /// Caller-supplied description of what was expected.
    pub message: String,
    /// Read position at which the expected element was missing.
    pub position: usize,
}

/// A lookahead cursor over an owned sequence.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Vec<T>,
    pos: usize,
}

impl<T: PartialEq> Cursor<T> {
    /// Creates a cursor positioned before the first element.
    #[must_use]
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        Self {
            items: items.into(),
            pos: 0,
        }
    }

    /// Returns the current read position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the length of the underlying sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the underlying sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true while unread elements remain.
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.pos < self.items.len()
    }

    /// Returns the current element without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.get(self.pos)
    }

    /// Returns the element after the current one without advancing.
    #[must_use]
    pub fn peek_next(&self) -> Option<&T> {
        self.items.get(self.pos + 1)
    }

    /// Returns the element immediately behind the read position.
    ///
    /// Returns `None` before the first advance.
    #[must_use]
    pub fn previous(&self) -> Option<&T> {
        self.pos.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Returns the current element and moves past it.
    ///
    /// The position moves even at the end of the sequence, so every
    /// further call returns `None`.
    pub fn advance(&mut self) -> Option<&T> {
        let index = self.pos;
        self.pos += 1;
        self.items.get(index)
    }

    /// Consumes the current element if it equals `expected`.
    pub fn advance_if(&mut self, expected: &T) -> Option<&T> {
        if self.peek() == Some(expected) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes the current element if it equals any of `candidates`.
    pub fn advance_if_any(&mut self, candidates: &[T]) -> Option<&T> {
        if candidates.iter().any(|c| self.peek() == Some(c)) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes the current element, which must equal `expected`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsumeError`] carrying `message` and the current
    /// position if the element is absent or different. The position is
    /// left unchanged.
    pub fn consume(&mut self, expected: &T, message: &str) -> Result<&T, ConsumeError> {
        let position = self.pos;
        if self.peek() == Some(expected) {
            if let Some(item) = self.advance() {
                return Ok(item);
            }
        }
        Err(ConsumeError {
            message: message.to_string(),
            position,
        })
    }
}

impl<'a> From<&'a str> for Cursor<char> {
    fn from(text: &'a str) -> Self {
        Self::new(text.chars().collect::<Vec<_>>())
    }
}
