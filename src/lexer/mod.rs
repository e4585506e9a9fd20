//! Lexical analysis for the C-like source language.
//!
//! This module contains the hand-written scanner that converts source text
//! into a flat stream of tokens. It handles:
//!
//! - Single- and two-byte operators with one byte of lookahead
//! - Line and block comments, emitted as tokens
//! - Raw string literals and early termination at a line feed
//! - Identifiers, fixed keywords and integer literals
//! - Line/column tracking and a non-fatal error log

pub mod scanner;
pub mod tokens;
