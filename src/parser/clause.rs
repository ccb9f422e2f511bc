use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

use super::{parser::Parser, term::{parse_atom, parse_term_list}};

/// `program := query | clause-list [ query ]`
///
/// Returns once the query, if any, has been parsed. Anything after the
/// query is not looked at.
pub fn parse_program(parser: &mut Parser) {
    if parser.at_special("?-") {
        parse_query(parser);
    } else {
        parse_clause_list(parser);
        if parser.at_special("?-") {
            parse_query(parser);
        }
    }
}

/// `clause-list := clause*`, up to `?-` or end of input.
pub fn parse_clause_list(parser: &mut Parser) {
    while parser.has_tokens() && !parser.at_special("?-") {
        parse_clause(parser);
    }
}

/// `clause := predicate '.' | predicate ':-' predicate-list '.'`
pub fn parse_clause(parser: &mut Parser) {
    parse_predicate(parser);

    if parser.at_special(".") {
        parser.expect_special(".");
    } else if parser.at_special(":-") {
        parser.expect_special(":-");
        parse_predicate_list(parser);
        parser.expect_special(".");
    } else {
        parser.error_and_skip(ErrorImpl::UnterminatedClause);
    }
}

/// `query := '?-' predicate-list '.'`
pub fn parse_query(parser: &mut Parser) {
    if parser.at_special("?-") {
        parser.expect_special("?-");
        parse_predicate_list(parser);
        parser.expect_special(".");
    } else {
        // No skip here: a query is only attempted after seeing `?-`.
        parser.error(ErrorImpl::MissingQueryPrefix);
    }
}

/// `predicate-list := predicate (',' predicate)*`
pub fn parse_predicate_list(parser: &mut Parser) {
    parse_predicate(parser);
    while parser.at_special(",") {
        parser.expect_special(",");
        parse_predicate(parser);
    }
}

/// `predicate := atom [ '(' term-list ')' ]`
pub fn parse_predicate(parser: &mut Parser) {
    match parser.current_token_kind() {
        TokenKind::Atom => {
            parse_atom(parser);
            if parser.at_special("(") {
                parser.expect_special("(");
                parse_term_list(parser);
                parser.expect_special(")");
            }
        }
        TokenKind::Number
        | TokenKind::Variable
        | TokenKind::Special
        | TokenKind::Error
        | TokenKind::EOF => parser.error_and_skip(ErrorImpl::PredicateWithoutAtom),
    }
}
