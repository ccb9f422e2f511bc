//! Recursive-descent syntax checker for the Prolog subset.
//!
//! One function per grammar rule, all working on a shared [`parser::Parser`]
//! cursor:
//!
//! - `clause` - program, clause list, clause, query, predicate list, predicate
//! - `term` - term list, term, atom
//!
//! The parser only validates structure. Its single output is the list of
//! syntax errors.

pub mod clause;
pub mod parser;
pub mod term;

#[cfg(test)]
mod tests;
