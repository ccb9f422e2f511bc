use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

use super::parser::Parser;

/// `term-list := term (',' term)*`
pub fn parse_term_list(parser: &mut Parser) {
    parse_term(parser);
    while parser.at_special(",") {
        parser.expect_special(",");
        parse_term(parser);
    }
}

/// `term := atom [ '(' term-list ')' ] | variable | numeral`
///
/// An atom followed by `(` is a structure; its arguments are terms again.
pub fn parse_term(parser: &mut Parser) {
    match parser.current_token_kind() {
        TokenKind::Atom => {
            parse_atom(parser);
            if parser.at_special("(") {
                parser.expect_special("(");
                parse_term_list(parser);
                parser.expect_special(")");
            }
        }
        TokenKind::Variable => {
            parser.expect(TokenKind::Variable);
        }
        TokenKind::Number => {
            parser.expect(TokenKind::Number);
        }
        TokenKind::Special | TokenKind::Error | TokenKind::EOF => {
            parser.error_and_skip(ErrorImpl::InvalidTerm)
        }
    }
}

/// `atom := ATOM`
pub fn parse_atom(parser: &mut Parser) {
    if parser.current_token_kind() == TokenKind::Atom {
        parser.expect(TokenKind::Atom);
    } else {
        parser.error_and_skip(ErrorImpl::ExpectedAtom);
    }
}
