//! Token types for the expression scanner.

use core::fmt;

/// Reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    /// `SELECT`
    Select,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: &'static [Self] = &[Self::Select];

    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(s))
    }

    /// Returns the canonical spelling of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
        }
    }
}

/// Symbolic and word operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// +
    Plus,
    /// -
    Minus,
    /// >
    Greater,
    /// >=
    GreaterOrEqual,
    /// <
    Less,
    /// <=
    LessOrEqual,
    /// /
    Divide,
    /// *
    Multiply,
    /// NOT
    Not,
    /// !=
    NotEqual,
    /// ==
    Equal,
    /// =
    Assign,
    /// (
    LeftParen,
    /// )
    RightParen,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Plus,
        Self::Minus,
        Self::Greater,
        Self::GreaterOrEqual,
        Self::Less,
        Self::LessOrEqual,
        Self::Divide,
        Self::Multiply,
        Self::Not,
        Self::NotEqual,
        Self::Equal,
        Self::Assign,
        Self::LeftParen,
        Self::RightParen,
    ];

    /// Attempts to parse an operator from its spelling.
    ///
    /// Word operators such as `NOT` match case-insensitively.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
    }

    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Divide => "/",
            Self::Multiply => "*",
            Self::Not => "NOT",
            Self::NotEqual => "!=",
            Self::Equal => "==",
            Self::Assign => "=",
            Self::LeftParen => "(",
            Self::RightParen => ")",
        }
    }

    /// Returns true for operators spelled with letters.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Not)
    }
}

macro_rules! impl_spelling_eq {
    ($ty:ty) => {
        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.as_str().eq_ignore_ascii_case(other)
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.as_str().eq_ignore_ascii_case(other)
            }
        }

        impl PartialEq<$ty> for str {
            fn eq(&self, other: &$ty) -> bool {
                other == self
            }
        }

        impl PartialEq<$ty> for &str {
            fn eq(&self, other: &$ty) -> bool {
                other == *self
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_spelling_eq!(Operator);
impl_spelling_eq!(Keyword);

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// Boolean literal.
    Boolean(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// A numeric or boolean literal.
    Literal(Literal),
    /// An operator or parenthesis.
    Operator(Operator),
    /// A reserved word.
    Keyword(Keyword),
}

impl Token {
    /// Returns true if this is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns the literal if this is a literal token.
    #[must_use]
    pub const fn as_literal(&self) -> Option<Literal> {
        match self {
            Self::Literal(lit) => Some(*lit),
            _ => None,
        }
    }

    /// Returns the operator if this is an operator token.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => fmt::Display::fmt(lit, f),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::Keyword(kw) => fmt::Display::fmt(kw, f),
        }
    }
}

impl From<Literal> for Token {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Keyword> for Token {
    fn from(kw: Keyword) -> Self {
        Self::Keyword(kw)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Self::Literal(Literal::Integer(n))
    }
}

impl From<f64> for Token {
    fn from(n: f64) -> Self {
        Self::Literal(Literal::Float(n))
    }
}

impl From<bool> for Token {
    fn from(b: bool) -> Self {
        Self::Literal(Literal::Boolean(b))
    }
}
