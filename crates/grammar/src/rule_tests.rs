// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn leaf(kind: RuleKind, position: usize, name: &str) -> Rule {
    Rule::leaf(kind, position, name, Span::default())
}

fn group(kind: RuleKind, position: usize, rules: Vec<Rule>) -> Rule {
    Rule::group(kind, position, rules, Span::default())
}

#[yare::parameterized(
    zero_or_one = { '?', RuleKind::ZeroOrOne },
    zero_or_more = { '*', RuleKind::ZeroOrMore },
    one_or_more = { '+', RuleKind::OneOrMore },
    exactly_one = { '!', RuleKind::ExactlyOneOf },
    free_form = { '@', RuleKind::FreeFormGroup },
)]
fn operators_round_trip(op: char, kind: RuleKind) {
    assert_eq!(RuleKind::from_operator(op), Some(kind));
    assert_eq!(kind.operator(), Some(op));
    assert!(kind.is_group());
}

#[test]
fn unknown_operator_has_no_kind() {
    assert_eq!(RuleKind::from_operator('#'), None);
    assert!(!RuleKind::Required.is_group());
}

#[test]
fn member_kind_follows_enclosing_operator() {
    assert_eq!(RuleKind::FreeFormGroup.member_kind(), RuleKind::FreeForm);
    assert_eq!(RuleKind::ZeroOrMore.member_kind(), RuleKind::Named);
    assert_eq!(RuleKind::ExactlyOneOf.member_kind(), RuleKind::Named);
}

#[test]
fn predicates_classify_leaves() {
    let rule = leaf(RuleKind::Required, 0, "f1");
    assert!(rule.is_required());
    assert!(!rule.has_nested_rules());
    assert_eq!(rule.name(), Some("f1"));
    assert!(rule.rules().is_empty());

    assert!(leaf(RuleKind::Constant, 1, "F2").is_constant());
    assert!(leaf(RuleKind::FreeForm, 0, "rest").is_free_form());
    assert!(leaf(RuleKind::Named, 0, "tid").is_named());
    assert!(Rule::end(3, Span::default()).is_end());
}

#[test]
fn predicates_classify_groups() {
    let body = vec![leaf(RuleKind::Named, 0, "f2")];
    let optional = group(RuleKind::ZeroOrOne, 0, body.clone());
    assert!(optional.is_zero_or_one());
    assert!(optional.is_optional());
    assert!(!optional.is_repeatable());
    assert!(optional.has_nested_rules());
    assert_eq!(optional.name(), None);
    assert_eq!(optional.rules().len(), 1);

    let many = group(RuleKind::ZeroOrMore, 0, body.clone());
    assert!(many.is_zero_or_more() && many.is_optional() && many.is_repeatable());

    let some = group(RuleKind::OneOrMore, 0, body.clone());
    assert!(some.is_one_or_more() && !some.is_optional() && some.is_repeatable());

    let exactly = group(RuleKind::ExactlyOneOf, 0, body.clone());
    assert!(exactly.is_exactly_one_of() && !exactly.is_optional());

    let rest = group(RuleKind::FreeFormGroup, 0, body);
    assert!(rest.is_free_form_group() && rest.is_optional());
}

#[test]
fn minimum_counts_required_and_one_or_more() {
    let rules = vec![
        leaf(RuleKind::Required, 0, "f1"),
        leaf(RuleKind::Constant, 1, "F2"),
        group(RuleKind::ZeroOrOne, 2, vec![leaf(RuleKind::Named, 0, "a")]),
        group(RuleKind::OneOrMore, 3, vec![leaf(RuleKind::Named, 0, "b")]),
        group(RuleKind::ExactlyOneOf, 4, vec![leaf(RuleKind::Named, 0, "c")]),
        Rule::end(5, Span::default()),
    ];
    assert_eq!(minimum_argument_count(&rules), 2);
    assert_eq!(minimum_argument_count(&[]), 0);
}

#[test]
fn describe_names_rule() {
    assert_eq!(leaf(RuleKind::Required, 0, "f1").describe(), "f1");
    assert_eq!(group(RuleKind::OneOrMore, 0, vec![]).describe(), "[...]+");
    assert_eq!(Rule::end(0, Span::default()).describe(), "end");
}
