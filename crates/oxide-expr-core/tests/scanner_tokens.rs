//! Tests for token classification: literals, operators, keywords and
//! separators.

mod common;
use common::*;

use oxide_expr_core::{Keyword, Literal, Operator, Token};

fn int(n: i64) -> Token {
    Token::Literal(Literal::Integer(n))
}

fn op(op: Operator) -> Token {
    Token::Operator(op)
}

// ===================================================================
// Literals
// ===================================================================

#[test]
fn scan_scalar_tokens() {
    assert_eq!(
        scan_ok("1 + 2 - 5"),
        vec![int(1), op(Operator::Plus), int(2), op(Operator::Minus), int(5)]
    );
}

#[test]
fn scan_long_numbers_keep_type() {
    let tokens = scan_ok("1231 + 1323.4");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], int(1231));
    assert_eq!(tokens[1], op(Operator::Plus));
    if let Token::Literal(Literal::Float(f)) = tokens[2] {
        assert!((f - 1323.4).abs() < f64::EPSILON);
    } else {
        panic!("Expected float literal, got {:?}", tokens[2]);
    }
}

#[test]
fn scan_integer_and_float_are_distinct() {
    assert_ne!(scan_ok("1"), scan_ok("1.0"));
}

#[test]
fn scan_boolean_case_insensitive() {
    for (input, expected) in [
        ("True", true),
        ("true", true),
        ("TRUE", true),
        ("False", false),
        ("false", false),
        ("FALSE", false),
    ] {
        assert_eq!(
            scan_ok(input),
            vec![Token::Literal(Literal::Boolean(expected))],
            "input: {input}"
        );
    }
}

// ===================================================================
// Separators
// ===================================================================

#[test]
fn scan_number_no_space_terminal() {
    assert_eq!(
        scan_ok("(1)"),
        vec![op(Operator::LeftParen), int(1), op(Operator::RightParen)]
    );
}

#[test]
fn scan_complex_var_separators() {
    assert_eq!(
        scan_ok("   )(1+ 2)*     3.5  "),
        vec![
            op(Operator::RightParen),
            op(Operator::LeftParen),
            int(1),
            op(Operator::Plus),
            int(2),
            op(Operator::RightParen),
            op(Operator::Multiply),
            Token::Literal(Literal::Float(3.5)),
        ]
    );
}

#[test]
fn scan_word_stops_at_symbol() {
    assert_eq!(
        scan_ok("(true)"),
        vec![
            op(Operator::LeftParen),
            Token::Literal(Literal::Boolean(true)),
            op(Operator::RightParen),
        ]
    );
}

#[test]
fn scan_token_count_matches_units() {
    let input = "1 + 2.5 * ( 3 - 4 ) >= true != false";
    assert_eq!(scan_ok(input).len(), input.split_whitespace().count());
}

// ===================================================================
// Operators
// ===================================================================

#[test]
fn scan_comparison_operators() {
    assert_eq!(scan_ok(">"), vec![op(Operator::Greater)]);
    assert_eq!(scan_ok(">="), vec![op(Operator::GreaterOrEqual)]);
    assert_eq!(scan_ok("<"), vec![op(Operator::Less)]);
    assert_eq!(scan_ok("<="), vec![op(Operator::LessOrEqual)]);
}

#[test]
fn scan_greater_or_equal_is_not_less_or_equal() {
    assert_ne!(scan_ok(">="), scan_ok("<="));
}

#[test]
fn scan_equality_operators() {
    assert_eq!(scan_ok("="), vec![op(Operator::Assign)]);
    assert_eq!(scan_ok("=="), vec![op(Operator::Equal)]);
    assert_eq!(scan_ok("!="), vec![op(Operator::NotEqual)]);
}

#[test]
fn scan_adjacent_operators() {
    assert_eq!(
        scan_ok("1<=-2"),
        vec![int(1), op(Operator::LessOrEqual), op(Operator::Minus), int(2)]
    );
    assert_eq!(
        scan_ok("=== "),
        vec![op(Operator::Equal), op(Operator::Assign)]
    );
}

// ===================================================================
// Words
// ===================================================================

#[test]
fn scan_not_operator() {
    assert_eq!(
        scan_ok("NOT true"),
        vec![op(Operator::Not), Token::Literal(Literal::Boolean(true))]
    );
    assert_eq!(scan_ok("not"), vec![op(Operator::Not)]);
}

#[test]
fn scan_keyword() {
    assert_eq!(scan_ok("select"), vec![Token::Keyword(Keyword::Select)]);
    assert_eq!(scan_ok("SELECT 1"), vec![Token::Keyword(Keyword::Select), int(1)]);
}

#[test]
fn scan_operator_matches_spelling() {
    let tokens = scan_ok("== >= NOT");
    let spellings: Vec<&str> = vec!["==", ">=", "not"];
    for (token, spelling) in tokens.iter().zip(spellings) {
        let operator = token.as_operator().unwrap();
        assert_eq!(operator, spelling);
    }
}
