//! Tests for scan failures.

mod common;
use common::*;

use oxide_expr_core::{ScanError, Span};

#[test]
fn error_unknown_character() {
    assert_eq!(
        scan_err("@"),
        ScanError::UnknownCharacter {
            character: '@',
            span: Span::new(0, 1),
        }
    );
}

#[test]
fn error_unknown_character_mid_input() {
    let err = scan_err("1 + 2 # 3");
    assert!(matches!(err, ScanError::UnknownCharacter { character: '#', .. }));
    assert_eq!(err.span(), Span::new(6, 7));
}

#[test]
fn error_glued_booleans() {
    assert_eq!(
        scan_err("TrueFalse"),
        ScanError::InvalidLiteral {
            text: String::from("TrueFalse"),
            span: Span::new(0, 9),
        }
    );
}

#[test]
fn error_identifier() {
    let err = scan_err("1 + price");
    assert!(matches!(err, ScanError::InvalidLiteral { ref text, .. } if text == "price"));
    assert_eq!(err.span(), Span::new(4, 9));
}

#[test]
fn error_bare_bang() {
    assert!(matches!(
        scan_err("1 ! 2"),
        ScanError::UnknownCharacter { character: '!', .. }
    ));
}

#[test]
fn error_leading_period() {
    assert!(matches!(
        scan_err(".5"),
        ScanError::UnknownCharacter { character: '.', .. }
    ));
}

#[test]
fn error_second_period() {
    assert!(matches!(
        scan_err("1.2.3"),
        ScanError::UnknownCharacter { character: '.', .. }
    ));
}

#[test]
fn error_integer_overflow() {
    assert!(matches!(
        scan_err("9223372036854775808"),
        ScanError::InvalidLiteral { .. }
    ));
}

#[test]
fn error_float_overflow() {
    let input = format!("{}.0", "9".repeat(400));
    assert!(matches!(
        scan_err(&input),
        ScanError::InvalidLiteral { .. }
    ));
}

#[test]
fn error_message() {
    assert_eq!(
        scan_err("TrueFalse").to_string(),
        "Invalid literal 'TrueFalse' at position 0..9"
    );
}
