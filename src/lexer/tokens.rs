use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("int", TokenKind::Int);
        map.insert("void", TokenKind::Void);
        map.insert("for", TokenKind::For);
        map.insert("printf", TokenKind::Printf);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Ident,
    IntLiteral,
    String,
    Comment,

    Assignment,  // =
    PlusEquals,  // +=
    MinusEquals, // -=
    PlusPlus,    // ++
    MinusMinus,  // --
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    Not,       // !
    Equals,    // ==
    NotEquals, // !=
    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Comma,
    Dot,
    Semicolon,

    // Reserved
    If,
    Else,
    While,
    Return,
    Int,
    Void,
    For,
    Printf,
}

impl TokenKind {
    /// The tag tooling matches against. Keywords are tagged with their own
    /// spelling, operators and punctuation with their lexeme.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::IntLiteral => "INT",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Assignment => "=",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Not => "!",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Int => "int",
            TokenKind::Void => "void",
            TokenKind::For => "for",
            TokenKind::Printf => "printf",
        }
    }

    /// Resolves a scanned identifier to its keyword kind, or `Ident`.
    pub fn lookup_ident(ident: &str) -> TokenKind {
        RESERVED_LOOKUP.get(ident).copied().unwrap_or(TokenKind::Ident)
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.get(self.as_str()) == Some(self)
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::IntLiteral | TokenKind::String | TokenKind::Comment
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assignment
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Not
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEquals
                | TokenKind::GreaterEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    /// Bytes advanced since the line's column reset. Line 1 counts from its
    /// first byte (column 1); every later line restarts at 0 on its first
    /// non-blank byte.
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_literal() {
            write!(f, "{} {} @{}:{}", self.kind, self.literal, self.line, self.column)
        } else {
            write!(f, "{} @{}:{}", self.kind, self.line, self.column)
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
