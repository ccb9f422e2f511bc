//! Unit tests for the parser module.
//!
//! Covers valid facts, rules, queries and structures, the exact error
//! messages for each grammar rule, and the forced-skip recovery including
//! its cascading follow-on errors.

use super::{
    clause::{parse_program, parse_query},
    parser::{parse, Parser},
    term::parse_atom,
};
use crate::{errors::errors::ErrorImpl, lexer::lexer::tokenize};

fn errors_for(source: &str) -> Vec<String> {
    parse(tokenize(source), false)
        .iter()
        .map(|error| error.to_string())
        .collect()
}

#[test]
fn test_parse_fact() {
    assert!(errors_for("parent(tom, bob).").is_empty());
}

#[test]
fn test_parse_fact_without_arguments() {
    assert!(errors_for("raining.").is_empty());
}

#[test]
fn test_parse_rule() {
    assert!(errors_for("ancestor(X,Y) :- parent(X,Y).").is_empty());
}

#[test]
fn test_parse_rule_with_several_goals() {
    let source = "grandparent(X, Z) :- parent(X, Y), parent(Y, Z), person(X).";
    assert!(errors_for(source).is_empty());
}

#[test]
fn test_parse_query_only() {
    assert!(errors_for("?- parent(tom, bob).").is_empty());
}

#[test]
fn test_parse_clauses_then_query() {
    let source = "parent(tom, bob).\nparent(bob, ann).\n?- parent(tom, X), parent(X, ann).\n";
    assert!(errors_for(source).is_empty());
}

#[test]
fn test_parse_empty_program() {
    assert!(errors_for("").is_empty());
    assert!(errors_for("  \n\t\n").is_empty());
}

#[test]
fn test_parse_nested_structures() {
    assert!(errors_for("f(X, g(Y, 1)).").is_empty());
    assert!(errors_for("f(a(b(c(D, 2)), _)).").is_empty());
}

#[test]
fn test_non_ascii_numeral_argument() {
    assert!(errors_for("f(١٢).").is_empty());
    assert!(errors_for("?- g(X, ٣).").is_empty());
}

#[test]
fn test_deeply_nested_structure() {
    let depth = 500;
    let source = format!("f({}x{}).", "g(".repeat(depth), ")".repeat(depth));

    assert!(errors_for(&source).is_empty());
}

#[test]
fn test_structure_may_have_space_before_paren() {
    assert!(errors_for("f (X, g (Y)).").is_empty());
}

#[test]
fn test_missing_comma_between_arguments() {
    let errors = errors_for("parent(tom bob).");

    assert_eq!(
        errors,
        vec![
            "Syntax Error at line 1: Expected SPECIAL ')' but found ATOM 'bob'",
            "Syntax Error at line 1: Clause must end with '.' or use ':-' followed by a predicate list and a '.'",
            "Syntax Error at line 1: Predicate must start with an atom",
        ]
    );
}

#[test]
fn test_clause_starting_with_number() {
    assert_eq!(
        errors_for("123 :- foo."),
        vec!["Syntax Error at line 1: Predicate must start with an atom"]
    );
}

#[test]
fn test_clause_starting_with_variable() {
    assert_eq!(
        errors_for("X."),
        vec!["Syntax Error at line 1: Predicate must start with an atom"]
    );
}

#[test]
fn test_query_missing_period() {
    assert_eq!(
        errors_for("?- foo(X)\n"),
        vec!["Syntax Error at line 2: Expected SPECIAL '.' but found EOF ''"]
    );
}

#[test]
fn test_clause_missing_period() {
    assert_eq!(
        errors_for("foo"),
        vec!["Syntax Error at line 1: Clause must end with '.' or use ':-' followed by a predicate list and a '.'"]
    );
}

#[test]
fn test_rule_body_missing_period() {
    assert_eq!(
        errors_for("foo :- bar\nbaz."),
        vec!["Syntax Error at line 2: Expected SPECIAL '.' but found ATOM 'baz'"]
    );
}

#[test]
fn test_empty_argument() {
    assert_eq!(
        errors_for("foo(X, )."),
        vec![
            "Syntax Error at line 1: Invalid term: expected atom, variable, numeral, or structure",
            "Syntax Error at line 1: Expected SPECIAL ')' but found SPECIAL '.'",
        ]
    );
}

#[test]
fn test_unrecognized_character_in_term() {
    assert_eq!(
        errors_for("foo(@)."),
        vec!["Syntax Error at line 1: Invalid term: expected atom, variable, numeral, or structure"]
    );
}

#[test]
fn test_empty_query() {
    assert_eq!(
        errors_for("?- ."),
        vec![
            "Syntax Error at line 1: Predicate must start with an atom",
            "Syntax Error at line 1: Expected SPECIAL '.' but found EOF ''",
        ]
    );
}

#[test]
fn test_query_marker_at_end_of_input() {
    assert_eq!(
        errors_for("foo. ?- "),
        vec![
            "Syntax Error at line 1: Predicate must start with an atom",
            "Syntax Error at line 1: Expected SPECIAL '.' but found EOF ''",
        ]
    );
}

#[test]
fn test_errors_keep_their_lines_and_order() {
    let errors = parse(tokenize("a.\nb(\n.\n"), false);
    let lines: Vec<u32> = errors.iter().map(|e| e.get_line()).collect();
    let kinds: Vec<&str> = errors.iter().map(|e| e.get_error_name()).collect();

    assert_eq!(lines, vec![3, 4, 4]);
    assert_eq!(kinds, vec!["InvalidTerm", "UnexpectedToken", "UnterminatedClause"]);
}

#[test]
fn test_valid_clauses_after_an_error_are_still_checked() {
    let errors = errors_for("good(a).\nbad(1 2).\nalso_good(X) :- good(X).\nfoo(.\n");

    assert!(errors.iter().any(|e| e.starts_with("Syntax Error at line 2:")));
    assert!(errors.iter().any(|e| e.starts_with("Syntax Error at line 4:")));
    assert!(!errors.iter().any(|e| e.starts_with("Syntax Error at line 3:")));
}

#[test]
fn test_tokens_after_query_are_not_checked() {
    assert!(errors_for("a. ?- b. c.").is_empty());
    assert!(errors_for("?- a. ?- 1 2 3").is_empty());
}

#[test]
fn test_query_requires_prefix() {
    let mut parser = Parser::new(tokenize("foo."), false);
    parse_query(&mut parser);

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].get_kind(), &ErrorImpl::MissingQueryPrefix);
    assert_eq!(parser.position(), 0);
}

#[test]
fn test_atom_rejects_non_atom_and_skips() {
    let mut parser = Parser::new(tokenize("Foo bar"), false);
    parse_atom(&mut parser);

    assert_eq!(parser.errors()[0].get_kind(), &ErrorImpl::ExpectedAtom);
    assert_eq!(parser.position(), 1);

    parse_atom(&mut parser);
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.position(), 2);
}

#[test]
fn test_advance_stops_at_eof() {
    let mut parser = Parser::new(tokenize("a"), false);
    parser.advance();
    parser.advance();
    parser.advance();

    assert_eq!(parser.position(), 1);
    assert!(!parser.has_tokens());
}

#[test]
fn test_stream_without_eof_gets_sentinel() {
    let mut tokens = tokenize("foo(");
    tokens.pop();

    assert_eq!(
        parse(tokens, false)
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()[0],
        "Syntax Error at line 1: Invalid term: expected atom, variable, numeral, or structure"
    );
}

#[test]
fn test_debug_tracing_does_not_change_errors() {
    let source = "parent(tom bob).\n?- x(";
    let quiet = parse(tokenize(source), false);
    let traced = parse(tokenize(source), true);

    assert_eq!(quiet, traced);
}

#[test]
fn test_parse_is_idempotent() {
    let source = "p(X) :- q(X, @).\n9.\n?- p(";
    assert_eq!(errors_for(source), errors_for(source));
}

/// Small deterministic generator for malformed programs.
fn token_soup(seed: u64, len: usize) -> String {
    const PIECES: [&str; 14] = [
        "a", "foo", "X", "_", "42", "(", ")", ",", ".", ":-", "@", " ", "\n", "-",
    ];
    let mut state = seed;
    let mut source = String::new();
    for _ in 0..len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        source.push_str(PIECES[(state >> 33) as usize % PIECES.len()]);
    }
    source
}

#[test]
fn test_malformed_input_always_reaches_eof() {
    for seed in 0..200 {
        let source = token_soup(seed, 60);
        let tokens = tokenize(&source);
        let token_count = tokens.len();

        let mut parser = Parser::new(tokens, false);
        parse_program(&mut parser);

        // No `?-` in the soup, so the clause list must run to the end.
        assert_eq!(parser.position(), token_count - 1, "source: {:?}", source);
        assert!(!parser.has_tokens());
    }
}

#[test]
fn test_error_count_is_bounded_by_tokens() {
    for seed in 0..200 {
        let source = format!("?- {}", token_soup(seed, 40));
        let tokens = tokenize(&source);
        let token_count = tokens.len();
        let errors = parse(tokens, false);

        // Every error either skips a token or closes a construct that
        // already consumed one.
        assert!(errors.len() <= 3 * token_count, "source: {:?}", source);
    }
}
