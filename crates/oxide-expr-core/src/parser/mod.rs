//! Expression parser
//!
//! A hand-written recursive descent parser with precedence climbing.

mod error;
mod parser;
mod precedence;

pub use error::ParseError;
pub use parser::{Ast, Parser, parse};
pub use precedence::Precedence;
