//! Operator precedence table.
//!
//! Tiers are listed loosest first. Each binary tier folds operands of the
//! next tighter tier; `Unary` hands off to primaries.

use crate::lexer::{Operator, Token};

/// A precedence tier of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `!=` `==`
    Equality,
    /// `>` `>=` `<` `<=`
    Comparison,
    /// `-` `+`
    Term,
    /// `/` `*`
    Factor,
    /// Prefix `NOT` `-`
    Unary,
}

const EQUALITY: &[Token] = &[
    Token::Operator(Operator::NotEqual),
    Token::Operator(Operator::Equal),
];

const COMPARISON: &[Token] = &[
    Token::Operator(Operator::Greater),
    Token::Operator(Operator::GreaterOrEqual),
    Token::Operator(Operator::Less),
    Token::Operator(Operator::LessOrEqual),
];

const TERM: &[Token] = &[
    Token::Operator(Operator::Minus),
    Token::Operator(Operator::Plus),
];

const FACTOR: &[Token] = &[
    Token::Operator(Operator::Divide),
    Token::Operator(Operator::Multiply),
];

const UNARY: &[Token] = &[
    Token::Operator(Operator::Not),
    Token::Operator(Operator::Minus),
];

impl Precedence {
    /// The loosest tier, where a full expression starts.
    pub const LOWEST: Self = Self::Equality;

    /// Returns the operator tokens recognized at this tier.
    #[must_use]
    pub const fn operators(self) -> &'static [Token] {
        match self {
            Self::Equality => EQUALITY,
            Self::Comparison => COMPARISON,
            Self::Term => TERM,
            Self::Factor => FACTOR,
            Self::Unary => UNARY,
        }
    }

    /// Returns the next tighter-binding tier, or `None` for `Unary`.
    #[must_use]
    pub const fn tighter(self) -> Option<Self> {
        match self {
            Self::Equality => Some(Self::Comparison),
            Self::Comparison => Some(Self::Term),
            Self::Term => Some(Self::Factor),
            Self::Factor => Some(Self::Unary),
            Self::Unary => None,
        }
    }

    /// Returns the binary tier an infix operator belongs to.
    #[must_use]
    pub fn of_infix(op: Operator) -> Option<Self> {
        let token = Token::Operator(op);
        [Self::Equality, Self::Comparison, Self::Term, Self::Factor]
            .into_iter()
            .find(|tier| tier.operators().contains(&token))
    }
}
