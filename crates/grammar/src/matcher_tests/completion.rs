// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{arg, int, set, strs, Fixture};
use crate::argtype::{ArgType, CandidateSource, Choice, CompletionContext, Dynamic, Prefix};
use crate::argument::Argument;
use crate::input::split_partial;

fn tenants() -> Fixture {
    Fixture::new(
        "tenant tname [tid]?",
        set(vec![
            Argument::new(
                "tname",
                Dynamic::new("tenants").fallback(["COMMON", "DEFAULT", "SINGLE", "MULTI"]),
            ),
            int("tid").default_value(0),
        ]),
    )
}

#[test]
fn first_argument_offers_type_help_and_candidates() {
    let suggestions = tenants().suggest("");
    assert_eq!(suggestions.help, ["tname: Enter a tenant name"]);
    assert_eq!(suggestions.candidates, ["COMMON", "DEFAULT", "SINGLE", "MULTI"]);
}

#[test]
fn candidates_filter_by_partial() {
    let suggestions = tenants().suggest("M");
    assert_eq!(suggestions.candidates, ["MULTI"]);
}

#[test]
fn flags_follow_a_committed_argument() {
    let suggestions = tenants().suggest("COMMON ");
    assert_eq!(suggestions.help, ["-tid"]);
    assert_eq!(suggestions.candidates, ["-tid"]);
}

#[test]
fn flags_complete_like_a_prefix_type() {
    let fixture = Fixture::new("cmd a [b | c]*", strs(&["a", "b", "c"]));
    let ctx = CompletionContext::new("");
    let (b, c) = (Prefix::new("-b"), Prefix::new("-c"));

    let suggestions = fixture.suggest("x -b 1 ");
    assert_eq!(suggestions.help, [b.help(""), c.help("")]);
    assert_eq!(suggestions.help, ["-b", "-c"]);
    assert_eq!(suggestions.candidates, ["-b", "-c"]);

    let filtered = fixture.suggest("x -b 1 -c");
    assert_eq!(filtered.candidates, c.complete(&ctx, "-c").unwrap());
    assert_eq!(b.complete(&ctx, "-c"), Some(Vec::new()));
}

#[test]
fn flag_value_gets_type_help() {
    let suggestions = tenants().suggest("COMMON -tid ");
    assert_eq!(suggestions.help, ["tid: Enter a number"]);
    assert!(suggestions.candidates.is_empty());
}

#[test]
fn alternatives_are_all_offered() {
    let fixture = Fixture::new(
        "node name [nid|nsig]?",
        set(vec![
            arg("name"),
            int("nid").default_value(0),
            arg("nsig").default_value(""),
        ]),
    );
    let suggestions = fixture.suggest("n1 -n");
    assert_eq!(suggestions.candidates, ["-nid", "-nsig"]);
    assert_eq!(fixture.suggest("n1 -ns").candidates, ["-nsig"]);
}

#[test]
fn constants_complete_to_their_literal() {
    let fixture = Fixture::new("setsyntax [<F2>|<F3>]!", strs(&[]));
    let suggestions = fixture.suggest("F");
    assert_eq!(suggestions.help, ["<F2>", "<F3>"]);
    assert_eq!(suggestions.candidates, ["F2", "F3"]);
}

#[test]
fn loop_offers_the_group_again() {
    let fixture = Fixture::new("leaf name [lid laddr]+", strs(&["name", "lid", "laddr"]));
    assert_eq!(fixture.suggest("l1 -lid 1 ").candidates, ["-laddr"]);
    assert_eq!(fixture.suggest("l1 -lid 1 -laddr a ").candidates, ["-lid"]);
}

#[test]
fn walk_stops_at_first_mismatch() {
    let fixture = tenants();
    let (committed, _) = split_partial("COMMON -bogus -tid ");
    let matcher = fixture.matcher();
    let stopped = matcher.walk(&committed);
    let (valid, _) = split_partial("COMMON ");
    assert_eq!(stopped, matcher.walk(&valid));
    assert_eq!(fixture.suggest("COMMON -bogus ").candidates, ["-tid"]);
}

#[test]
fn description_overrides_type_help() {
    let fixture = Fixture::new(
        "cmd level",
        set(vec![
            Argument::new("level", Choice::new(["low", "high"])).description("How loud"),
        ]),
    );
    let suggestions = fixture.suggest("h");
    assert_eq!(suggestions.help, ["level: How loud"]);
    assert_eq!(suggestions.candidates, ["high"]);
}

#[test]
fn nothing_after_the_end() {
    let fixture = Fixture::new("cmd a", strs(&["a"]));
    let suggestions = fixture.suggest("x ");
    assert!(suggestions.help.is_empty());
    assert!(suggestions.candidates.is_empty());
}

#[test]
fn toolbar_joins_help() {
    let fixture = Fixture::new(
        "node name [nid|nsig]?",
        set(vec![
            arg("name"),
            int("nid").default_value(0),
            arg("nsig").default_value(""),
        ]),
    );
    assert_eq!(fixture.suggest("n1 ").toolbar(" | "), "-nid | -nsig");
}

struct Live;

impl CandidateSource for Live {
    fn candidates(&self, key: &str) -> Option<Vec<String>> {
        (key == "tenants").then(|| vec!["acme".to_string(), "globex".to_string()])
    }
}

#[test]
fn host_candidates_replace_fallback() {
    let fixture = tenants();
    let live = Live;
    let ctx = CompletionContext::new("").with_source(&live);
    let suggestions = fixture.matcher().suggest(&[], "", &ctx);
    assert_eq!(suggestions.candidates, ["acme", "globex"]);
}

#[test]
fn duplicate_candidates_are_dropped() {
    let fixture = Fixture::new(
        "cmd [a|b]@",
        set(vec![
            Argument::new("a", Choice::new(["x", "y"])).default_value("x"),
            Argument::new("b", Choice::new(["y", "z"])).default_value("y"),
        ]),
    );
    let suggestions = fixture.suggest("");
    assert_eq!(suggestions.help.len(), 2);
    assert_eq!(suggestions.candidates, ["x", "y", "z"]);
}
