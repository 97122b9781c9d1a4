// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{parse_shape, Grammar, ParserConfig, RuleKind};
use crate::argtype::{Int, Str};
use crate::argument::{Argument, ArgumentSet};

// =============================================================================
// Rule Shapes
// =============================================================================

#[yare::parameterized(
    command_only = { "exit", "End" },
    positionals = { "the-command f1 f2", "Required(f1) Required(f2) End" },
    constant = { "setsyntax f1 <F2>", "Required(f1) Constant(F2) End" },
    optional = { "tenant tname [tid]?", "Required(tname) ZeroOrOne[Named(tid)] End" },
    alternatives = {
        "node name [nid|nsig]?",
        "Required(name) ZeroOrOne[Named(nid)|Named(nsig)] End"
    },
    sequence_in_loop = {
        "leaf name [lid laddr]+",
        "Required(name) OneOrMore[Named(lid) Named(laddr)] End"
    },
    free_form = { "dbg name [options]@", "Required(name) FreeFormGroup[FreeForm(options)] End" },
    exactly_one_constants = {
        "setsyntax [<F2>|<F3>]!",
        "ExactlyOneOf[Constant(F2)|Constant(F3)] End"
    },
    nested = {
        "setsyntax f1 [f2 | f3 [f4|f5]?]?",
        "Required(f1) ZeroOrOne[Named(f2)|Named(f3) ZeroOrOne[Named(f4)|Named(f5)]] End"
    },
    several_groups = {
        "setsyntax f1 [f2]? [f3]+ [f4]* [f5]?",
        "Required(f1) ZeroOrOne[Named(f2)] OneOrMore[Named(f3)] ZeroOrMore[Named(f4)] ZeroOrOne[Named(f5)] End"
    },
    tight_spacing = { "c a[b|c]*", "Required(a) ZeroOrMore[Named(b)|Named(c)] End" },
)]
fn parses_into(source: &str, expected: &str) {
    similar_asserts::assert_eq!(parse_shape(source), expected);
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn positions_restart_after_pipe() {
    let grammar = Grammar::parse("setsyntax f1 [f2 f3 | f4 [f5]?]*").unwrap();
    let group = &grammar.rules()[1];
    let positions: Vec<_> = group.rules().iter().map(|r| r.position).collect();
    assert_eq!(positions, [0, 1, 0, 1]);
    assert_eq!(group.position, 1);
}

#[test]
fn top_level_positions_are_sequential() {
    let grammar = Grammar::parse("cmd a b [c]? [d]+").unwrap();
    let positions: Vec<_> = grammar.rules().iter().map(|r| r.position).collect();
    assert_eq!(positions, [0, 1, 2, 3, 4]);
}

#[test]
fn group_span_covers_brackets_and_operator() {
    let source = "tenant tname [tid]?";
    let grammar = Grammar::parse(source).unwrap();
    assert_eq!(grammar.rules()[1].span.slice(source), "[tid]?");
    assert_eq!(grammar.rules()[0].span.slice(source), "tname");
}

#[test]
fn single_end_rule_terminates() {
    let grammar = Grammar::parse("node name [nid|nsig]?").unwrap();
    let ends = grammar.rules().iter().filter(|r| r.is_end()).count();
    assert_eq!(ends, 1);
    assert!(grammar.rules().last().unwrap().is_end());
    assert!(grammar.rules()[1].rules().iter().all(|r| !r.is_end()));
}

#[test]
fn minimum_count_from_grammar() {
    let grammar = Grammar::parse("cmd a [b]+").unwrap();
    assert_eq!(grammar.minimum_argument_count(), 2);
    assert_eq!(grammar.source(), "cmd a [b]+");
}

// =============================================================================
// Depth Limit
// =============================================================================

#[test]
fn nesting_within_limit_parses() {
    let config = ParserConfig {
        max_nesting_depth: 3,
    };
    let grammar = Grammar::parse_with_config("c [a [b [d]?]?]?", &config).unwrap();
    assert_eq!(grammar.rules().len(), 2);
}

#[test]
fn zero_depth_limit_is_unlimited() {
    let source = format!("c {}x{}", "[a ".repeat(40), "]?".repeat(40));
    let config = ParserConfig {
        max_nesting_depth: 0,
    };
    assert!(Grammar::parse_with_config(&source, &config).is_ok());
}

// =============================================================================
// Grammar From Arguments
// =============================================================================

#[test]
fn arguments_become_required_rules() {
    let args = ArgumentSet::new()
        .with(Argument::new("name", Str))
        .and_then(|set| set.with(Argument::new("count", Int)))
        .unwrap();
    let grammar = Grammar::from_arguments("spawn", &args);
    assert_eq!(grammar.command(), "spawn");
    assert_eq!(grammar.source(), "spawn name count");
    assert_eq!(
        super::shape(grammar.rules()),
        "Required(name) Required(count) End"
    );
    assert_eq!(grammar.rules()[1].span.slice(grammar.source()), "count");
    assert_eq!(grammar.rules()[0].kind, RuleKind::Required);
}
