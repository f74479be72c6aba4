//! Crate-level error type covering the whole scan→parse pipeline.

use crate::lexer::{ScanError, scan};
use crate::parser::{Ast, ParseError, parse};

/// Any failure of [`parse_str`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text could not be scanned.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// The tokens could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for the scan→parse pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Scans and parses `text` into an AST.
///
/// # Errors
///
/// Returns [`Error::Scan`] or [`Error::Parse`] for the first failure;
/// no partial tree is produced.
pub fn parse_str(text: &str) -> Result<Ast> {
    let tokens = scan(text)?;
    Ok(parse(tokens)?)
}
