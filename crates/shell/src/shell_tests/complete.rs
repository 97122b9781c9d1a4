// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{shell, shell_with, Completion, ShellConfig};
use indexmap::IndexMap;

#[test]
fn empty_line_offers_every_command() {
    let completion = shell().complete("");
    assert_eq!(
        completion.candidates,
        ["help", "exit", "tenant", "node", "leaf", "fail"]
    );
    assert_eq!(completion.toolbar, "help | exit | tenant | node | leaf | fail");
}

#[yare::parameterized(
    one = { "te", &["tenant"] },
    exit = { "ex", &["exit"] },
    none = { "zz", &[] },
    leading_space = { "  n", &["node"] },
)]
fn command_names_filter_by_prefix(line: &str, expected: &[&str]) {
    assert_eq!(shell().complete(line).candidates, expected);
}

#[test]
fn argument_falls_back_to_static_candidates() {
    let completion = shell().complete("tenant ");
    assert_eq!(completion.toolbar, "tname: Enter a tenant name");
    assert_eq!(completion.candidates, ["COMMON", "DEFAULT"]);
}

#[test]
fn configured_candidates_replace_the_fallback() {
    let mut candidates = IndexMap::new();
    candidates.insert(
        "tenants".to_string(),
        vec!["acme".to_string(), "globex".to_string()],
    );
    let shell = shell_with(ShellConfig {
        candidates,
        ..ShellConfig::default()
    });
    assert_eq!(shell.complete("tenant ").candidates, ["acme", "globex"]);
    assert_eq!(shell.complete("tenant g").candidates, ["globex"]);
}

#[test]
fn flags_are_offered_after_positionals() {
    let completion = shell().complete("node n1 ");
    assert_eq!(completion.candidates, ["-nid", "-nsig"]);
    assert_eq!(completion.toolbar, "-nid | -nsig");
}

#[test]
fn flag_values_get_type_help() {
    let completion = shell().complete("tenant acme -tid ");
    assert_eq!(completion.toolbar, "tid: Enter a number");
    assert!(completion.candidates.is_empty());
}

#[test]
fn groups_are_offered_again_after_a_pass() {
    let completion = shell().complete("leaf l1 -lid 1 -laddr a -");
    assert_eq!(completion.candidates, ["-lid"]);
}

#[test]
fn unknown_command_has_nothing_to_offer() {
    assert_eq!(shell().complete("frobnicate "), Completion::default());
}

#[test]
fn separator_comes_from_the_config() {
    let shell = shell_with(ShellConfig {
        toolbar_separator: ", ".to_string(),
        ..ShellConfig::default()
    });
    assert_eq!(shell.complete("node n1 ").toolbar, "-nid, -nsig");
}

#[test]
fn unterminated_quote_still_completes() {
    assert_eq!(shell().complete(r#"tenant "CO"#).candidates, ["COMMON"]);
}

#[test]
fn registered_commands_join_the_cache() {
    let shell = shell();
    let names = shell.cache().get(crate::COMMANDS_KEY).unwrap();
    assert_eq!(names, ["help", "exit", "tenant", "node", "leaf", "fail"]);
    assert_eq!(shell.complete("help t").candidates, ["tenant"]);
}
