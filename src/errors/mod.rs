//! Error types for syntax checking.
//!
//! Every grammar violation the parser finds becomes an [`errors::Error`]:
//! an [`errors::ErrorImpl`] naming the broken rule plus the line it was
//! found on. Errors are collected, never raised.

pub mod errors;
