//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE!` - Emits a one-byte token and steps past it
//!
//! These macros reduce boilerplate in the scanner's dispatch table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's text
/// * `$line` - 1-based line of the token's first byte
/// * `$column` - Column of the token's first byte
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), 1, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            line: $line,
            column: $column,
        }
    };
}

/// Emits a token for a fixed single-byte lexeme and advances past it.
///
/// # Example
///
/// ```ignore
/// b';' => MK_SINGLE!(self, TokenKind::Semicolon, line, column),
/// ```
#[macro_export]
macro_rules! MK_SINGLE {
    ($scanner:expr, $kind:expr, $line:expr, $column:expr) => {{
        $scanner.advance();
        MK_TOKEN!($kind, String::from($kind.as_str()), $line, $column)
    }};
}
