use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str);

struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, first match wins. Two-character specials come before
    // the single-character ones.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\d+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-z][a-zA-Z0-9_]*").unwrap(), handler: atom_handler },
        RegexPattern { regex: Regex::new("^[A-Z_][a-zA-Z0-9_]*").unwrap(), handler: variable_handler },
        RegexPattern { regex: Regex::new("^\\?-").unwrap(), handler: MK_DEFAULT_HANDLER!("?-") },
        RegexPattern { regex: Regex::new("^:-").unwrap(), handler: MK_DEFAULT_HANDLER!(":-") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(".") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(",") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!("(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(")") },
        RegexPattern { regex: Regex::new("^[ \t]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\n").unwrap(), handler: newline_handler },
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    /// Byte offset into `source`
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn push_matched(lexer: &mut Lexer, kind: TokenKind, matched: &str) {
    let line = lexer.line;
    lexer.push(MK_TOKEN!(kind, String::from(matched), line));
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    push_matched(lexer, TokenKind::Number, matched);
}

fn atom_handler(lexer: &mut Lexer, matched: &str) {
    push_matched(lexer, TokenKind::Atom, matched);
}

fn variable_handler(lexer: &mut Lexer, matched: &str) {
    push_matched(lexer, TokenKind::Variable, matched);
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn newline_handler(lexer: &mut Lexer, matched: &str) {
    lexer.line += 1;
    lexer.advance_n(matched.len());
}

/// Emits the next character on its own as an `Error` token.
fn mismatch_handler(lexer: &mut Lexer) {
    // `at_eof` was checked by the caller, so there is always a next char.
    if let Some(ch) = lexer.remainder().chars().next() {
        let line = lexer.line;
        lexer.push(MK_TOKEN!(TokenKind::Error, ch.to_string(), line));
        lexer.advance_n(ch.len_utf8());
    }
}

/// Splits `source` into tokens, always ending with a single `EOF` token.
///
/// Never fails: characters outside the grammar come out as `Error` tokens
/// and are left for the parser to reject.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => mismatch_handler(&mut lex),
        }
    }

    let line = lex.line;
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), line));
    lex.tokens
}
