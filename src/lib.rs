#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{ErrorTip, LexError};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::ErrorImpl;
pub use lexer::scanner::{tokenize, Scanner};
pub use lexer::tokens::{Token, TokenKind};

/// Line and column of a point in the source, as tracked by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line`, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::{display_error, get_line, Position};
    use crate::{errors::errors::LexError, ErrorImpl, Scanner};

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(get_line(source, 1), Some("Hello, world!"));
        assert_eq!(get_line(source, 2), Some("second"));
        assert_eq!(get_line(source, 3), Some(""));
        assert_eq!(get_line(source, 4), Some("Testing { }"));
        assert_eq!(get_line(source, 0), None);
        assert_eq!(get_line(source, 9), None);
    }

    #[test]
    fn test_display_error() {
        let source = "int a;\n  \"oops\nint b;\n";
        let error = LexError::new(
            ErrorImpl::NonTerminatedString {
                partial: "oops".to_string(),
            },
            Position::new(2, 5),
        );

        let rendered = display_error(&error, source, "test.c");
        let lines = rendered.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("Error: NonTerminatedString ("));
        assert_eq!(lines[1], "-> test.c:2:5");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | \"oops");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_display_error_after_block_comment() {
        let source = "/*\n  */ \"ab\n";
        let mut scanner = Scanner::new(source);
        scanner.tokens();

        assert_eq!(scanner.error_messages(), vec!["[2:6] non-terminated string"]);

        let rendered = display_error(&scanner.errors()[0], source, "test.c");
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[3], "2 | */ \"ab");
        assert_eq!(lines[4], "  | ------^");
    }
}

/// Renders `error` against the source it was found in:
///
/// ```text
/// Error: NonTerminatedString (string starting with `abc` is missing its closing `"`)
/// -> main.c:4:4
///   |
/// 4 | "abc
///   | ----^
/// ```
pub fn display_error(error: &LexError, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_text = get_line(source, position.line).unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}:{}\n", file, position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    // The first line counts columns from its first byte, later lines from
    // their first non-blank byte (column 0).
    let (shown, arrows) = if position.line == 1 {
        (line_text.trim_end().to_string(), position.column.max(1))
    } else {
        let (trimmed, _) = remove_starting_whitespace(line_text);
        (trimmed.trim_end().to_string(), position.column + 1)
    };
    out.push_str(&format!("{} | {}\n", line_string, shown));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.bytes() {
        if c == b' ' || c == b'\t' || c == b'\r' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
