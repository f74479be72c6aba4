#![allow(dead_code)]

use oxide_expr_core::{Ast, ParseError, ScanError, Token, parse, scan};

pub fn scan_ok(text: &str) -> Vec<Token> {
    scan(text).unwrap_or_else(|e| panic!("Failed to scan: {text}\nError: {e:?}"))
}

pub fn scan_err(text: &str) -> ScanError {
    scan(text).expect_err(&format!("Expected scan error for: {text}"))
}

pub fn parse_ok(text: &str) -> Ast {
    parse(scan_ok(text)).unwrap_or_else(|e| panic!("Failed to parse: {text}\nError: {e:?}"))
}

pub fn parse_err(text: &str) -> ParseError {
    parse(scan_ok(text)).expect_err(&format!("Expected parse error for: {text}"))
}

/// Renders a tree as an S-expression, e.g. `(+ (+ 1 2) 3)`, so tests can
/// assert on shape in one line. Grouping nodes render as `(( inner)`.
pub fn sexpr(node: &Ast) -> String {
    if !node.has_any() {
        return node.data().to_string();
    }
    let children: Vec<String> = node.children().iter().map(sexpr).collect();
    format!("({} {})", node.data(), children.join(" "))
}

/// Parses `text` and returns its S-expression.
pub fn shape(text: &str) -> String {
    sexpr(&parse_ok(text))
}
