//! Parser state and the token-level primitives the grammar procedures
//! are built from.
//!
//! The parser does not build a tree. It walks the token stream once,
//! records every syntax error it finds, and keeps going. When a
//! procedure cannot make sense of the current token it records an error
//! and skips exactly one token, so the walk always makes progress.

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::tokens::{Token, TokenKind},
};

use super::clause::parse_program;

/// Cursor over a token stream plus the errors found so far.
pub struct Parser {
    /// The tokens to check, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Index of the current token; never moves past `EOF`
    pos: usize,
    /// Errors in the order they were found
    errors: Vec<Error>,
    /// Emit a debug event for every match and every error
    debug: bool,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// A stream without a trailing `EOF` token gets one appended, so the
    /// cursor always has a sentinel to stop on.
    pub fn new(mut tokens: Vec<Token>, debug: bool) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                line,
            });
        }

        Parser {
            tokens,
            pos: 0,
            errors: vec![],
            debug,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// True if the current token is the `Special` symbol `symbol`.
    pub fn at_special(&self, symbol: &str) -> bool {
        self.current_token().is_special(symbol)
    }

    /// Moves to the next token. Does nothing at `EOF`.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consumes the current token if it has the expected kind and, when
    /// given, the expected text.
    ///
    /// On a mismatch an `UnexpectedToken` error is recorded and the cursor
    /// stays put; recovery is up to the caller.
    pub fn expect_value(&mut self, expected_kind: TokenKind, expected_value: Option<&str>) -> bool {
        let token = self.current_token();
        let matches =
            token.kind == expected_kind && expected_value.map_or(true, |value| token.value == value);

        if matches {
            if self.debug {
                debug!(token = %token, "matched");
            }
            self.advance();
            return true;
        }

        let error = ErrorImpl::UnexpectedToken {
            expected: Expected {
                kind: expected_kind,
                value: expected_value.map(String::from),
            },
            found_kind: token.kind,
            found: token.value.clone(),
        };
        self.error(error);
        false
    }

    /// Consumes the `Special` token `symbol`.
    pub fn expect_special(&mut self, symbol: &str) -> bool {
        self.expect_value(TokenKind::Special, Some(symbol))
    }

    /// Consumes a token of the given kind, whatever its text.
    pub fn expect(&mut self, expected_kind: TokenKind) -> bool {
        self.expect_value(expected_kind, None)
    }

    /// Records an error against the current token's line.
    pub fn error(&mut self, error: ErrorImpl) {
        let error = Error::new(error, self.current_token().line);
        if self.debug {
            debug!(kind = error.get_error_name(), line = error.get_line(), "{}", error);
        }
        self.errors.push(error);
    }

    /// Records an error and skips the current token.
    ///
    /// This is the only recovery the parser does. Follow-on errors from
    /// the rest of a malformed construct are expected.
    pub fn error_and_skip(&mut self, error: ErrorImpl) {
        self.error(error);
        self.advance();
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Errors found so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Checks a token stream against the grammar.
///
/// This is the main entry point for parsing: it walks the whole program
/// once and returns every syntax error found, in the order found. An empty
/// result means the tokens form a valid program.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by the lexer
/// * `debug` - Emit `tracing` debug events while parsing
pub fn parse(tokens: Vec<Token>, debug: bool) -> Vec<Error> {
    let mut parser = Parser::new(tokens, debug);
    parse_program(&mut parser);
    parser.into_errors()
}
