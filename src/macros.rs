//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for a fixed special symbol

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's matched text
/// * `$line` - The line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a lexer handler for a fixed special symbol.
///
/// The generated handler pushes a `Special` token carrying `$value` and
/// advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^:-").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(":-"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            let line = lexer.line;
            lexer.push(MK_TOKEN!(TokenKind::Special, String::from($value), line));
            lexer.advance_n($value.len());
        }
    };
}
