use std::fmt::Display;

/// Every kind of token the lexer can produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Atom,
    Variable,
    /// One of `?-`, `:-`, `.`, `,`, `(`, `)`
    Special,
    /// A single character no other pattern accepts
    Error,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Atom => "ATOM",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Special => "SPECIAL",
            TokenKind::Error => "ERROR",
            TokenKind::EOF => "EOF",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' (line {})", self.kind, self.value, self.line)
    }
}

impl Token {
    /// True for a `Special` token with exactly the given text.
    pub fn is_special(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Special && self.value == symbol
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
