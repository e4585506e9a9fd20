use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A recoverable lexical problem. Logging one never stops the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    internal_error: ErrorImpl,
    position: Position,
}

impl LexError {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        LexError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NonTerminatedString { .. } => "NonTerminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NonTerminatedString { partial } if partial.is_empty() => {
                ErrorTip::Suggestion(String::from("add a closing `\"` on the same line"))
            }
            ErrorImpl::NonTerminatedString { partial } => ErrorTip::Suggestion(format!(
                "string starting with `{}` is missing its closing `\"`",
                preview(partial)
            )),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.position, self.internal_error)
    }
}

impl std::error::Error for LexError {}

fn preview(text: &str) -> String {
    const MAX: usize = 16;

    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let mut short = text.chars().take(MAX).collect::<String>();
        short.push_str("...");
        short
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("non-terminated string")]
    NonTerminatedString { partial: String },
}
