#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod report;

extern crate regex;

use crate::{lexer::lexer::tokenize, parser::parser::parse};

/// Checks `source` against the Prolog subset grammar.
///
/// Returns one `Syntax Error at line N: ...` string per error, in the
/// order found. An empty vector means the text is syntactically correct.
pub fn check_syntax(source: &str) -> Vec<String> {
    check_syntax_with(source, false)
}

/// Same as [`check_syntax`], optionally emitting `tracing` debug events
/// for every token matched and every error recorded.
pub fn check_syntax_with(source: &str, debug: bool) -> Vec<String> {
    let tokens = tokenize(source);
    parse(tokens, debug)
        .into_iter()
        .map(|error| error.to_string())
        .collect()
}
