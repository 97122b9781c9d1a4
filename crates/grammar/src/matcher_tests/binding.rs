// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{arg, int, list, s, set, strs, values, Fixture};
use crate::argtype::Map;
use crate::argument::Argument;
use crate::value::Value;
use indexmap::IndexMap;

// =============================================================================
// Positional And Named
// =============================================================================

#[test]
fn sequence_in_one_or_more_group() {
    let fixture = Fixture::new("setsyntax f1 [f2 f3 f4]+", strs(&["f1", "f2", "f3", "f4"]));
    let bound = fixture.bind(r#"F1 -f2 "2" -f3 "3" -f4 "4""#).unwrap();
    assert_eq!(values(&bound), [s("F1"), s("2"), s("3"), s("4")]);
}

#[test]
fn optional_alternatives_keep_defaults() {
    let fixture = Fixture::new(
        "setsyntax f1 f2 [f3|f4]?",
        set(vec![
            arg("f1"),
            int("f2"),
            arg("f3").default_value("XX"),
            int("f4").default_value(0),
        ]),
    );
    let bound = fixture.bind("F2 100").unwrap();
    assert_eq!(values(&bound), [s("F2"), 100.into(), s("XX"), 0.into()]);

    let bound = fixture.bind("F2 100 -f4 1").unwrap();
    assert_eq!(values(&bound), [s("F2"), 100.into(), s("XX"), 1.into()]);
}

#[test]
fn optional_named_argument() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]?",
        set(vec![int("f1"), arg("f2").default_value("field 2")]),
    );
    assert_eq!(values(&fixture.bind("50").unwrap()), [50.into(), s("field 2")]);
    assert_eq!(
        values(&fixture.bind(r#"101 -f2 "custom f2""#).unwrap()),
        [101.into(), s("custom f2")]
    );
}

#[test]
fn named_token_binds_value_directly() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]?",
        set(vec![int("f1"), arg("f2").default_value("field 2")]),
    );
    assert_eq!(
        values(&fixture.bind("f1=7 f2=direct").unwrap()),
        [7.into(), s("direct")]
    );
}

#[test]
fn second_alternative_of_optional_group() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2|f3]?",
        set(vec![
            int("f1"),
            arg("f2").default_value("field 2"),
            int("f3").default_value(1),
        ]),
    );
    let bound = fixture.bind("101 -f3 100").unwrap();
    assert_eq!(values(&bound), [101.into(), s("field 2"), 100.into()]);
}

#[test]
fn nested_optional_group() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2 | f3 [f4|f5]?]?",
        set(vec![
            int("f1"),
            arg("f2").default_value("field 2"),
            arg("f3").default_value("field 3"),
            arg("f4").default_value("field 4"),
            arg("f5").default_value("name"),
        ]),
    );
    let bound = fixture.bind("50 -f3 f3 -f4 f4").unwrap();
    assert_eq!(
        values(&bound),
        [50.into(), s("field 2"), s("f3"), s("f4"), s("name")]
    );
}

#[test]
fn consecutive_optional_groups() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]? [f3]?",
        set(vec![
            arg("f1"),
            int("f2").default_value(0),
            int("f3").default_value(0),
        ]),
    );
    let bound = fixture.bind("F1 -f2 30 -f3 40").unwrap();
    assert_eq!(values(&bound), [s("F1"), 30.into(), 40.into()]);
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn zero_or_more_collects_a_list() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]*",
        set(vec![arg("f1"), int("f2").default_value(0)]),
    );
    let bound = fixture.bind("myshelf -f2 100 -f2 101").unwrap();
    assert_eq!(bound["f2"], list(vec![100.into(), 101.into()]));
}

#[test]
fn zero_or_more_alternatives_collect_separately() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2|f3]*",
        set(vec![
            arg("f1"),
            int("f2").default_value(0),
            arg("f3").default_value(""),
        ]),
    );
    let bound = fixture
        .bind("myshelf -f2 200 -f3 f3-1 -f3 f3-2 -f2 300")
        .unwrap();
    assert_eq!(bound["f2"], list(vec![200.into(), 300.into()]));
    assert_eq!(bound["f3"], list(vec![s("f3-1"), s("f3-2")]));
}

#[test]
fn zero_or_more_absent_keeps_default() {
    let fixture = Fixture::new("cmd a [b]*", set(vec![arg("a"), arg("b").default_value("B")]));
    let bound = fixture.bind("X").unwrap();
    assert_eq!(bound["a"], s("X"));
    assert_eq!(bound["b"], s("B"));
}

#[test]
fn one_or_more_alternatives() {
    let fixture = Fixture::new("setsyntax f1 [f2|f3]+", strs(&["f1", "f2", "f3"]));
    let bound = fixture
        .bind("myshelf -f2 100 -f3 300 -f2 101 -f3 301")
        .unwrap();
    assert_eq!(bound["f2"], list(vec![s("100"), s("101")]));
    assert_eq!(bound["f3"], list(vec![s("300"), s("301")]));
}

#[test]
fn single_match_stays_scalar() {
    let fixture = Fixture::new("setsyntax f1 [f2]+", strs(&["f1", "f2"]));
    let bound = fixture.bind("myshelf -f2 100").unwrap();
    assert_eq!(bound["f2"], s("100"));
}

// =============================================================================
// Constants
// =============================================================================

#[test]
fn declared_constant_binds_literal() {
    let fixture = Fixture::new("setsyntax f1 <F2>", strs(&["f1", "F2"]));
    let bound = fixture.bind("myshelf F2").unwrap();
    assert_eq!(values(&bound), [s("myshelf"), s("F2")]);
}

#[test]
fn exactly_one_of_constants() {
    let fixture = Fixture::new(
        "setsyntax f1 [<F2>|<F3>]!",
        set(vec![
            arg("f1"),
            arg("F2").default_value(""),
            arg("F3").default_value(""),
        ]),
    );
    let bound = fixture.bind("myshelf F3").unwrap();
    assert_eq!(bound["F2"], s(""));
    assert_eq!(bound["F3"], s("F3"));
}

#[test]
fn undeclared_constant_is_matched_but_not_bound() {
    let fixture = Fixture::new("config <show> name", strs(&["name"]));
    let bound = fixture.bind("show eth0").unwrap();
    assert_eq!(values(&bound), [s("eth0")]);
}

// =============================================================================
// Free Form
// =============================================================================

#[test]
fn free_form_takes_every_token() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]@",
        set(vec![int("f1"), arg("f2").default_value("")]),
    );
    let bound = fixture.bind("10 one two three").unwrap();
    assert_eq!(bound["f2"], list(vec![s("one"), s("two"), s("three")]));

    let bound = fixture.bind("10 one p=two three f=four").unwrap();
    assert_eq!(
        bound["f2"],
        list(vec![s("one"), s("p=two"), s("three"), s("f=four")])
    );
}

#[test]
fn free_form_allows_no_tokens() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]@",
        set(vec![int("f1"), arg("f2").default_value("")]),
    );
    assert_eq!(fixture.bind("10").unwrap()["f2"], s(""));
}

#[test]
fn free_form_map_merges_pairs() {
    let fixture = Fixture::new(
        "setsyntax f1 [dicta]@",
        set(vec![
            int("f1"),
            Argument::new("dicta", Map).default_value(Value::Map(IndexMap::new())),
        ]),
    );
    let bound = fixture.bind("10 one=1 two=2").unwrap();
    let expected: IndexMap<String, String> = [("one", "1"), ("two", "2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(bound["dicta"], Value::Map(expected));
}

#[test]
fn free_form_accepts_dash_tokens() {
    let fixture = Fixture::new("dbg name [options]@", strs(&["name", "options"]));
    let bound = fixture.bind("n1 -v --all").unwrap();
    assert_eq!(bound["options"], list(vec![s("-v"), s("--all")]));
}

// =============================================================================
// Bookkeeping
// =============================================================================

#[test]
fn bindings_report_match_counts() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]*",
        set(vec![arg("f1"), int("f2").default_value(0)]),
    );
    let tokens = crate::input::tokenize("x -f2 1 -f2 2 -f2 3").unwrap();
    let bindings = fixture.matcher().match_tokens(&tokens).unwrap();
    assert_eq!(bindings.matched("f1"), 1);
    assert_eq!(bindings.matched("f2"), 3);
    assert_eq!(
        bindings.get("f2"),
        Some(&list(vec![1.into(), 2.into(), 3.into()]))
    );
}

#[test]
fn each_pass_starts_from_defaults() {
    let fixture = Fixture::new(
        "setsyntax f1 [f2]*",
        set(vec![arg("f1"), int("f2").default_value(0)]),
    );
    fixture.bind("x -f2 1 -f2 2").unwrap();
    let bound = fixture.bind("y").unwrap();
    assert_eq!(bound["f2"], 0.into());
}
