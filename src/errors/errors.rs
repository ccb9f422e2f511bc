use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A syntax error and the line of the token it was reported against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnterminatedClause => "UnterminatedClause",
            ErrorImpl::MissingQueryPrefix => "MissingQueryPrefix",
            ErrorImpl::PredicateWithoutAtom => "PredicateWithoutAtom",
            ErrorImpl::InvalidTerm => "InvalidTerm",
            ErrorImpl::ExpectedAtom => "ExpectedAtom",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Syntax Error at line {}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

/// The token a failed `expect` was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} '{}'", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Expected {expected} but found {found_kind} '{found}'")]
    UnexpectedToken {
        expected: Expected,
        found_kind: TokenKind,
        found: String,
    },
    #[error("Clause must end with '.' or use ':-' followed by a predicate list and a '.'")]
    UnterminatedClause,
    #[error("Query should start with '?-'")]
    MissingQueryPrefix,
    #[error("Predicate must start with an atom")]
    PredicateWithoutAtom,
    #[error("Invalid term: expected atom, variable, numeral, or structure")]
    InvalidTerm,
    #[error("Expected an atom")]
    ExpectedAtom,
}
