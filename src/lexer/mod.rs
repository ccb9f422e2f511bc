//! Lexical analysis for the Prolog subset.
//!
//! Converts source text into a flat token stream using an ordered table of
//! regex patterns. Line numbers are tracked per token, and characters that
//! no pattern accepts become `Error` tokens instead of aborting the scan.

pub mod lexer;
pub mod tokens;
