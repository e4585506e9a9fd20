use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{
    errors::errors::{ErrorImpl, LexError},
    Position, MK_SINGLE, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Hand-written scanner over an owned source buffer.
///
/// The cursor always holds the current byte (`ch`) plus one byte of
/// lookahead through [`Scanner::peek`]. `ch` is `None` once the input is
/// exhausted, so no source byte can be mistaken for end of input.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    file: String,
    position: usize,
    read_position: usize,
    ch: Option<u8>,
    line: usize,
    column: usize,
    errors: Vec<LexError>,
    exhausted: bool,
}

impl Scanner {
    pub fn new(source: impl Into<String>) -> Scanner {
        Scanner::with_file(source, "<input>")
    }

    /// Like [`Scanner::new`], with a display name used in diagnostics.
    pub fn with_file(source: impl Into<String>, file: impl Into<String>) -> Scanner {
        let mut scanner = Scanner {
            source: source.into(),
            file: file.into(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 0,
            errors: vec![],
            exhausted: false,
        };

        scanner.advance();
        scanner
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error log rendered as `[line:column] message` strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(LexError::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Drains the scanner, returning every token up to and including EOF.
    pub fn tokens(&mut self) -> Vec<Token> {
        let mut result = vec![];

        loop {
            let token = self.next_token();
            let done = token.is_eof();
            result.push(token);

            if done {
                break;
            }
        }

        debug!(
            file = %self.file,
            tokens = result.len(),
            errors = self.errors.len(),
            "scan complete"
        );
        result
    }

    /// Scans one token. Once the input is exhausted every call returns EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_line_breaks();

        let (line, column) = (self.line, self.column);

        let token = match self.ch {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), line, column),
            Some(byte) => match byte {
                b'=' => self.operator(TokenKind::Assignment, &[(b'=', TokenKind::Equals)], line, column),
                b'+' => self.operator(
                    TokenKind::Plus,
                    &[(b'+', TokenKind::PlusPlus), (b'=', TokenKind::PlusEquals)],
                    line,
                    column,
                ),
                b'-' => self.operator(
                    TokenKind::Minus,
                    &[(b'-', TokenKind::MinusMinus), (b'=', TokenKind::MinusEquals)],
                    line,
                    column,
                ),
                b'!' => self.operator(TokenKind::Not, &[(b'=', TokenKind::NotEquals)], line, column),
                b'<' => self.operator(TokenKind::Less, &[(b'=', TokenKind::LessEquals)], line, column),
                b'>' => self.operator(TokenKind::Greater, &[(b'=', TokenKind::GreaterEquals)], line, column),
                b'/' => match self.peek() {
                    Some(b'/') => self.read_line_comment(line, column),
                    Some(b'*') => self.read_block_comment(line, column),
                    _ => MK_SINGLE!(self, TokenKind::Slash, line, column),
                },
                b'*' => MK_SINGLE!(self, TokenKind::Star, line, column),
                b'%' => MK_SINGLE!(self, TokenKind::Percent, line, column),
                b'(' => MK_SINGLE!(self, TokenKind::OpenParen, line, column),
                b')' => MK_SINGLE!(self, TokenKind::CloseParen, line, column),
                b'{' => MK_SINGLE!(self, TokenKind::OpenCurly, line, column),
                b'}' => MK_SINGLE!(self, TokenKind::CloseCurly, line, column),
                b'[' => MK_SINGLE!(self, TokenKind::OpenBracket, line, column),
                b']' => MK_SINGLE!(self, TokenKind::CloseBracket, line, column),
                b',' => MK_SINGLE!(self, TokenKind::Comma, line, column),
                b'.' => MK_SINGLE!(self, TokenKind::Dot, line, column),
                b';' => MK_SINGLE!(self, TokenKind::Semicolon, line, column),
                b'"' => self.read_string(line, column),
                b if is_letter(b) => self.read_identifier(line, column),
                b if is_digit(b) => self.read_number(line, column),
                _ => {
                    self.advance();
                    // Bytes are read as Latin-1 so a stray UTF-8 byte still
                    // produces a printable lexeme.
                    MK_TOKEN!(TokenKind::Illegal, char::from(byte).to_string(), line, column)
                }
            },
        };

        trace!(kind = %token.kind, literal = %token.literal, line, column, "token");
        token
    }

    pub(crate) fn advance(&mut self) {
        if self.ch.is_none() && self.read_position > 0 {
            return;
        }

        self.ch = self.source.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\r')) {
            self.advance();
        }
    }

    /// Absorbs blank space and every line feed ahead of the next token.
    /// The column restarts after the new line's leading whitespace.
    fn skip_line_breaks(&mut self) {
        loop {
            self.skip_whitespace();

            if self.ch != Some(b'\n') {
                break;
            }

            self.line += 1;
            self.advance();
            self.skip_whitespace();
            self.column = 0;
        }
    }

    /// Emits the two-byte operator whose second byte matches the lookahead,
    /// falling back to the single-byte `single`.
    fn operator(
        &mut self,
        single: TokenKind,
        pairs: &[(u8, TokenKind)],
        line: usize,
        column: usize,
    ) -> Token {
        let next = self.peek();

        match pairs.iter().find(|(second, _)| next == Some(*second)) {
            Some(&(_, kind)) => {
                self.advance();
                self.advance();
                MK_TOKEN!(kind, String::from(kind.as_str()), line, column)
            }
            None => MK_SINGLE!(self, single, line, column),
        }
    }

    fn read_line_comment(&mut self, line: usize, column: usize) -> Token {
        let start = self.position;

        while !matches!(self.ch, None | Some(b'\r' | b'\n')) {
            self.advance();
        }

        MK_TOKEN!(TokenKind::Comment, self.slice(start), line, column)
    }

    fn read_block_comment(&mut self, line: usize, column: usize) -> Token {
        let start = self.position;

        // "/*"
        self.advance();
        self.advance();

        loop {
            match self.ch {
                None => {
                    debug!(file = %self.file, line, column, "block comment runs to end of input");
                    break;
                }
                Some(b'*') if self.peek() == Some(b'/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                Some(b'\n') => {
                    self.line += 1;
                    self.advance();
                    self.skip_whitespace();
                    self.column = 0;
                }
                Some(_) => self.advance(),
            }
        }

        MK_TOKEN!(TokenKind::Comment, self.slice(start), line, column)
    }

    /// Reads a string literal without interpreting escapes. A line feed or
    /// end of input before the closing quote ends the literal early and is
    /// logged; the line feed itself is left for the next call.
    fn read_string(&mut self, line: usize, column: usize) -> Token {
        self.advance();
        let start = self.position;

        loop {
            match self.ch {
                Some(b'"') => {
                    let literal = self.slice(start);
                    self.advance();
                    return MK_TOKEN!(TokenKind::String, literal, line, column);
                }
                None | Some(b'\n') => {
                    let literal = self.slice(start);
                    self.add_error(ErrorImpl::NonTerminatedString {
                        partial: literal.clone(),
                    });
                    return MK_TOKEN!(TokenKind::String, literal, line, column);
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn read_identifier(&mut self, line: usize, column: usize) -> Token {
        let start = self.position;

        while self.ch.is_some_and(is_letter) {
            self.advance();
        }

        let literal = self.slice(start);
        MK_TOKEN!(TokenKind::lookup_ident(&literal), literal, line, column)
    }

    fn read_number(&mut self, line: usize, column: usize) -> Token {
        let start = self.position;

        while self.ch.is_some_and(is_digit) {
            self.advance();
        }

        MK_TOKEN!(TokenKind::IntLiteral, self.slice(start), line, column)
    }

    // Every slice ends on an ASCII byte or at end of input, so it always
    // falls on a char boundary.
    fn slice(&self, start: usize) -> String {
        String::from(&self.source[start..self.position])
    }

    fn add_error(&mut self, error: ErrorImpl) {
        let error = LexError::new(error, Position::new(self.line, self.column));
        debug!(file = %self.file, %error, "lexical error");
        self.errors.push(error);
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        self.exhausted = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Scanner {}

fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Scans `source` in one pass, returning its tokens and the error log.
pub fn tokenize(source: impl Into<String>) -> (Vec<Token>, Vec<LexError>) {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.tokens();
    (tokens, scanner.into_errors())
}
