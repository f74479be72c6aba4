//! Scanner implementation.

use tracing::{debug, trace};

use super::{Keyword, Literal, Operator, ScanError, Span, Token};
use crate::cursor::Cursor;

/// A scanner that classifies characters into tokens.
pub struct Scanner {
    /// Character cursor over the input.
    cursor: Cursor<char>,
    /// The offset of the first character of the current token.
    start: usize,
}

impl Scanner {
    /// Creates a new scanner for the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::from(input),
            start: 0,
        }
    }

    /// Skips whitespace.
    fn skip_whitespace(&mut self) {
        while self.cursor.peek().is_some_and(|c| c.is_whitespace()) {
            self.cursor.advance();
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.cursor.position())
    }

    /// Picks `extended` if the next character is `=`, else `plain`.
    fn with_trailing_eq(&mut self, extended: Operator, plain: Operator) -> Token {
        if self.cursor.advance_if(&'=').is_some() {
            Token::Operator(extended)
        } else {
            Token::Operator(plain)
        }
    }

    /// Scans a number (integer or float). `first` is already consumed.
    fn scan_number(&mut self, first: char) -> Result<Token, ScanError> {
        let mut text = String::from(first);
        let mut is_float = false;

        self.take_digits(&mut text);

        if self.cursor.advance_if(&'.').is_some() {
            is_float = true;
            text.push('.');
            self.take_digits(&mut text);
        }

        // Out-of-range floats parse as infinity; reject them like integer
        // overflow.
        let literal = if is_float {
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Literal::Float)
        } else {
            text.parse::<i64>().ok().map(Literal::Integer)
        };

        literal.map(Token::Literal).ok_or_else(|| ScanError::InvalidLiteral {
            text,
            span: self.make_span(),
        })
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(&c) = self.cursor.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }
    }

    /// Scans a word: a word operator, a keyword or a boolean.
    /// `first` is already consumed.
    fn scan_word(&mut self, first: char) -> Result<Token, ScanError> {
        let mut text = String::from(first);
        while let Some(&c) = self.cursor.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            text.push(c);
            self.cursor.advance();
        }

        if let Some(op) = Operator::from_str(&text).filter(Operator::is_word) {
            return Ok(Token::Operator(op));
        }
        if let Some(keyword) = Keyword::from_str(&text) {
            return Ok(Token::Keyword(keyword));
        }
        if text.eq_ignore_ascii_case("true") {
            return Ok(Token::Literal(Literal::Boolean(true)));
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(Token::Literal(Literal::Boolean(false)));
        }

        Err(ScanError::InvalidLiteral {
            text,
            span: self.make_span(),
        })
    }

    /// Scans the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] for an unrecognized character or an
    /// alphabetic run that is neither a keyword nor a boolean.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.skip_whitespace();
        self.start = self.cursor.position();

        let Some(&c) = self.cursor.advance() else {
            return Ok(None);
        };

        let token = match c {
            // Single-character operators
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '(' => Token::Operator(Operator::LeftParen),
            ')' => Token::Operator(Operator::RightParen),

            // Operators that may take a trailing '='
            '<' => self.with_trailing_eq(Operator::LessOrEqual, Operator::Less),
            '>' => self.with_trailing_eq(Operator::GreaterOrEqual, Operator::Greater),
            '=' => self.with_trailing_eq(Operator::Equal, Operator::Assign),
            '!' if self.cursor.advance_if(&'=').is_some() => Token::Operator(Operator::NotEqual),

            c if c.is_ascii_digit() => self.scan_number(c)?,
            c if c.is_alphabetic() => self.scan_word(c)?,

            c => {
                return Err(ScanError::UnknownCharacter {
                    character: c,
                    span: Span::at(self.start),
                });
            }
        };

        trace!(%token, span = %self.make_span(), "token");
        Ok(Some(token))
    }

    /// Scans the entire input and returns all tokens.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError`] encountered; no partial result is
    /// produced.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Scans `text` into tokens, in source order.
///
/// # Errors
///
/// Returns a [`ScanError`] on the first character or run that cannot be
/// classified.
pub fn scan(text: &str) -> Result<Vec<Token>, ScanError> {
    debug!(input = text, "scanning");
    let tokens = Scanner::new(text).tokenize()?;
    debug!(count = tokens.len(), "scanned");
    Ok(tokens)
}
