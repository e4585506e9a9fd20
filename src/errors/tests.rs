//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{ErrorImpl, ErrorTip, LexError};
use crate::{Position, Scanner};

fn non_terminated(partial: &str, line: usize, column: usize) -> LexError {
    LexError::new(
        ErrorImpl::NonTerminatedString {
            partial: partial.to_string(),
        },
        Position::new(line, column),
    )
}

#[test]
fn test_error_creation() {
    let error = non_terminated("abc", 3, 7);

    assert_eq!(error.get_error_name(), "NonTerminatedString");
    assert_eq!(*error.get_position(), Position::new(3, 7));
}

#[test]
fn test_error_display() {
    let error = non_terminated("a final test", 4, 13);

    assert_eq!(error.to_string(), "[4:13] non-terminated string");
    assert_eq!(error.get_kind().to_string(), "non-terminated string");
}

#[test]
fn test_error_tip_suggestion() {
    match non_terminated("abc", 1, 5).get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`abc`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_for_long_literal_is_shortened() {
    let tip = non_terminated("a very long string literal indeed", 1, 1)
        .get_tip()
        .to_string();

    assert!(tip.contains("`a very long stri...`"));
}

#[test]
fn test_error_tip_for_empty_literal() {
    let tip = non_terminated("", 1, 2).get_tip().to_string();

    assert!(tip.contains("closing"));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_scanner_error_log_is_ordered() {
    let mut scanner = Scanner::new("\"one\n\"two\n\"three\"");
    scanner.tokens();

    assert!(scanner.has_errors());
    assert_eq!(
        scanner.error_messages(),
        vec!["[1:5] non-terminated string", "[2:4] non-terminated string"]
    );
}

#[test]
fn test_error_log_grows_between_calls() {
    let mut scanner = Scanner::new("x \"open\ny");

    scanner.next_token();
    assert!(!scanner.has_errors());

    scanner.next_token();
    assert_eq!(scanner.errors().len(), 1);

    scanner.next_token();
    assert_eq!(scanner.errors().len(), 1);
}
