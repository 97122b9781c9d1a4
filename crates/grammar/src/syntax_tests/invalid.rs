// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Grammar, GrammarError, ParserConfig};
use crate::span::Span;

fn parse_err(source: &str) -> GrammarError {
    Grammar::parse(source).unwrap_err()
}

// =============================================================================
// Brackets
// =============================================================================

#[test]
fn unclosed_bracket_points_at_open() {
    let err = parse_err("node name [nid|nsig");
    assert_eq!(err, GrammarError::UnclosedBracket { span: Span::new(10, 11) });
}

#[test]
fn unclosed_outer_bracket_after_nested_group() {
    let err = parse_err("c [a [b]?");
    assert_eq!(err, GrammarError::UnclosedBracket { span: Span::new(2, 3) });
}

#[test]
fn stray_closing_bracket() {
    assert!(matches!(
        parse_err("c a ]?"),
        GrammarError::UnexpectedToken { span, .. } if span == Span::new(4, 5)
    ));
}

#[test]
fn missing_operator_after_group() {
    let err = parse_err("tenant tname [tid]");
    assert_eq!(err, GrammarError::MissingOperator { span: Span::empty(18) });
}

#[test]
fn operator_inside_group() {
    assert!(matches!(
        parse_err("c [a ? b]?"),
        GrammarError::UnexpectedToken { .. }
    ));
}

// =============================================================================
// Alternatives
// =============================================================================

#[yare::parameterized(
    empty_group = { "c []?" },
    leading_pipe = { "c [|a]?" },
    trailing_pipe = { "c [a|]?" },
    double_pipe = { "c [a||b]*" },
)]
fn empty_alternatives_are_rejected(source: &str) {
    assert!(matches!(
        parse_err(source),
        GrammarError::EmptyAlternative { .. }
    ));
}

// =============================================================================
// Tokens
// =============================================================================

#[yare::parameterized(
    hash = { "c [a]#", '#' },
    equals = { "c a=b", '=' },
    slash = { "c a/b", '/' },
)]
fn unknown_characters(source: &str, ch: char) {
    assert!(matches!(
        parse_err(source),
        GrammarError::UnexpectedCharacter { ch: found, .. } if found == ch
    ));
}

#[yare::parameterized(
    unterminated = { "c <F2" },
    empty = { "c <>" },
)]
fn malformed_constants(source: &str) {
    assert_eq!(
        parse_err(source),
        GrammarError::MalformedConstant { span: Span::new(2, 3) }
    );
}

#[test]
fn empty_grammar_needs_command() {
    assert_eq!(
        parse_err("   "),
        GrammarError::UnexpectedEnd {
            expected: "command name".into(),
            span: Span::empty(3),
        }
    );
}

#[test]
fn grammar_must_start_with_word() {
    assert!(matches!(
        parse_err("[a]? cmd"),
        GrammarError::UnexpectedToken { .. }
    ));
}

#[test]
fn positional_after_group_is_rejected() {
    let err = parse_err("tenant [tid]? tname");
    let GrammarError::UnexpectedToken { found, span, .. } = err else {
        panic!("expected UnexpectedToken, got {err:?}");
    };
    assert_eq!(found, "word 'tname'");
    assert_eq!(span, Span::new(14, 19));
}

// =============================================================================
// Depth Limit
// =============================================================================

#[test]
fn nesting_beyond_limit_fails_fast() {
    let config = ParserConfig {
        max_nesting_depth: 2,
    };
    let err = Grammar::parse_with_config("c [a [b [d]?]?]?", &config).unwrap_err();
    assert_eq!(
        err,
        GrammarError::NestingTooDeep {
            limit: 2,
            span: Span::new(8, 9),
        }
    );
}

#[test]
fn default_limit_stops_pathological_nesting() {
    let source = format!("c {}x{}", "[a ".repeat(100), "]?".repeat(100));
    assert!(matches!(
        Grammar::parse(&source),
        Err(GrammarError::NestingTooDeep { limit: 16, .. })
    ));
}

#[test]
fn diagnostic_renders_grammar_error() {
    let source = "dbg name [options]#";
    let err = parse_err(source);
    let diag = err.diagnostic(source).unwrap();
    assert!(diag.contains("unexpected character '#'"));
    assert!(diag.contains("--> column 19"));
}
