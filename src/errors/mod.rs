//! Error types for lexical analysis.
//!
//! Lexical problems are never fatal. The scanner records them in an
//! ordered log and keeps going, so a caller always gets a full token
//! stream plus every diagnostic found along the way:
//!
//! - `LexError` pairs an error kind with the line/column it was found at
//! - `ErrorImpl` enumerates the kinds of lexical errors
//! - `ErrorTip` carries an optional human-facing suggestion

pub mod errors;

#[cfg(test)]
mod tests;
