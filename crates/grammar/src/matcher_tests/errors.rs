// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{arg, int, set, strs, Fixture};
use crate::error::MatchError;
use crate::span::Span;

fn unknown(token: &str, start: usize) -> MatchError {
    MatchError::UnknownArgument {
        token: token.to_string(),
        span: Span::new(start, start + token.len()),
    }
}

// =============================================================================
// Unknown
// =============================================================================

#[test]
fn second_alternative_after_first_is_unknown() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2|f3]?",
        set(vec![
            int("f1"),
            arg("f2").default_value("field 2"),
            int("f3").default_value(1),
        ]),
    );
    let line = r#"101 -f2 "garbage" -f3 100"#;
    let err = fixture.bind(line).unwrap_err();
    assert_eq!(err, unknown("-f3", 18));
    assert_eq!(err.to_string(), "<-f3> not found");
}

#[test]
fn exactly_one_of_rejects_a_second_member() {
    let fixture = Fixture::new("setsyntax f1 [f2|f3]!", strs(&["f1", "f2", "f3"]));
    let err = fixture.bind("myshelf -f2 100 -f3 300").unwrap_err();
    assert_eq!(err, unknown("-f3", 16));
}

#[test]
fn wrong_constant_is_unknown() {
    let fixture = Fixture::new("setsyntax f1 <F2>", strs(&["f1"]));
    assert_eq!(fixture.bind("X WRONG").unwrap_err(), unknown("WRONG", 2));
}

#[yare::parameterized(
    one_or_more_before_optional = { "100 -f2 ?f2 -f4 *f4 -f5 ?f5", "-f4", 12 },
    optional_after_its_turn = { "100 -f3 +f3 -f2 ?f2", "-f2", 12 },
)]
fn groups_are_ordered(line: &str, token: &str, start: usize) {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]? [f3]+ [f4]* [f5]?",
        set(vec![
            int("f1"),
            arg("f2").default_value(""),
            arg("f3"),
            arg("f4").default_value(""),
            arg("f5").default_value(""),
        ]),
    );
    assert_eq!(fixture.bind(line).unwrap_err(), unknown(token, start));
}

#[test]
fn flag_past_the_end_is_unknown_not_too_many() {
    let fixture = Fixture::new("cmd a", strs(&["a"]));
    assert_eq!(fixture.bind("x -b").unwrap_err(), unknown("-b", 2));
}

// =============================================================================
// Counts
// =============================================================================

#[test]
fn too_few_tokens_for_one_or_more() {
    let fixture = Fixture::new("setsyntax f1 [f2]+", strs(&["f1", "f2"]));
    let err = fixture.bind("myshelf").unwrap_err();
    assert_eq!(
        err,
        MatchError::TooFewArguments {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn bare_token_past_the_end_is_too_many() {
    let fixture = Fixture::new("cmd a", strs(&["a"]));
    assert_eq!(
        fixture.bind("x y").unwrap_err(),
        MatchError::TooManyArguments {
            token: "y".to_string(),
            span: Span::new(2, 3),
        }
    );
}

// =============================================================================
// Mandatory
// =============================================================================

#[test]
fn missing_constant_is_mandatory() {
    let fixture = Fixture::new("setsyntax f1 <F2>", strs(&["f1"]));
    assert_eq!(
        fixture.bind("myshelf").unwrap_err(),
        MatchError::MandatoryArgumentMissing {
            name: "F2".to_string()
        }
    );
    assert!(fixture.bind("myshelf F2").is_ok());
}

#[test]
fn exactly_one_of_needs_a_member() {
    let fixture = Fixture::new("cmd a [b|c]!", strs(&["a", "b", "c"]));
    assert_eq!(
        fixture.bind("x").unwrap_err(),
        MatchError::MandatoryArgumentMissing {
            name: "b|c".to_string()
        }
    );
}

#[yare::parameterized(
    arguments = { "setsyntax f1 [f2 | f3]!", &["f1", "f2", "f3"], "f2|f3" },
    constants = { "setsyntax f1 [<F2>|<F3>]!", &["f1"], "F2|F3" },
)]
fn empty_exactly_one_of_names_every_alternative(source: &str, names: &[&str], name: &str) {
    let fixture = Fixture::new(source, strs(names));
    let err = fixture.bind("myshelf").unwrap_err();
    assert_eq!(
        err,
        MatchError::MandatoryArgumentMissing {
            name: name.to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        format!("mandatory argument <{name}> not present")
    );
}

#[test]
fn optional_group_member_without_default_is_mandatory() {
    let fixture = Fixture::new("cmd a [b]?", strs(&["a", "b"]));
    let err = fixture.bind("x").unwrap_err();
    assert_eq!(
        err,
        MatchError::MandatoryArgumentMissing {
            name: "b".to_string()
        }
    );
    assert_eq!(err.to_string(), "mandatory argument <b> not present");
}

#[test]
fn flag_without_value_is_mandatory() {
    let fixture = Fixture::new("cmd a [b]?", set(vec![arg("a"), arg("b").default_value("")]));
    assert_eq!(
        fixture.bind("x -b").unwrap_err(),
        MatchError::MandatoryArgumentMissing {
            name: "b".to_string()
        }
    );
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn conversion_failure_names_the_argument() {
    let fixture = Fixture::new("cmd count", set(vec![int("count")]));
    let err = fixture.bind("many").unwrap_err();
    assert_eq!(
        err,
        MatchError::TypeConversion {
            name: "count".to_string(),
            value: "many".to_string(),
            reason: "'many' is not a number".to_string(),
            span: Span::new(0, 4),
        }
    );
    assert_eq!(err.span(), Some(Span::new(0, 4)));
}

#[test]
fn conversion_failure_on_named_value_points_at_token() {
    let fixture = Fixture::new(
        "cmd a [n]?",
        set(vec![arg("a"), int("n").default_value(0)]),
    );
    let err = fixture.bind("x n=oops").unwrap_err();
    assert_eq!(err.span(), Some(Span::new(2, 8)));
}
