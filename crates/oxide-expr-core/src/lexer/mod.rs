//! Expression scanner.
//!
//! This module turns source text into a stream of typed tokens.

mod error;
mod scanner;
mod span;
mod token;

pub use error::ScanError;
pub use scanner::{Scanner, scan};
pub use span::Span;
pub use token::{Keyword, Literal, Operator, Token};
