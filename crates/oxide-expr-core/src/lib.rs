//! # oxide-expr-core
//!
//! Front end for a small SQL-style expression language.
//!
//! This crate provides:
//! - A generic lookahead [`Cursor`] shared by both stages
//! - A hand-written scanner producing typed [`Token`]s
//! - A precedence-climbing recursive descent parser producing a [`TreeNode`] AST
//!
//! ## Scanning and parsing
//!
//! ```rust
//! use oxide_expr_core::{Operator, Token, parse, scan};
//!
//! let tokens = scan("1 + 2 * 3").unwrap();
//! let root = parse(tokens).unwrap();
//!
//! // 1 + (2 * 3)
//! assert_eq!(*root.data(), Token::Operator(Operator::Plus));
//! assert_eq!(*root.children()[1].data(), Token::Operator(Operator::Multiply));
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use oxide_expr_core::parse_str;
//!
//! let root = parse_str("True == False").unwrap();
//! assert_eq!(root.to_string(), "└── ==\n    ├── true\n    └── false\n");
//! ```

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use cursor::{ConsumeError, Cursor};
pub use error::{Error, Result, parse_str};
pub use lexer::{Keyword, Literal, Operator, ScanError, Scanner, Span, Token, scan};
pub use parser::{Ast, ParseError, Parser, Precedence, parse};
pub use tree::TreeNode;
