// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jc_shell::ShellConfig;

fn shell_with(config: ShellConfig) -> Shell {
    let mut shell = Shell::new(config).unwrap();
    register(&mut shell).unwrap();
    shell
}

fn shell() -> Shell {
    shell_with(ShellConfig::default())
}

fn run(shell: &Shell, line: &str) -> String {
    match shell.execute(line).unwrap() {
        Outcome::Output(text) => text,
        other => panic!("expected output, got {other:?}"),
    }
}

#[yare::parameterized(
    tenant_default = { "tenant acme", r#"{"tname":"acme","tid":0}"# },
    tenant_flag = { "tenant acme -tid 3", r#"{"tname":"acme","tid":3}"# },
    node_signature = { "node n1 -nsig 5", r#"{"name":"n1","nid":0,"nsig":5}"# },
    leaf_single_pass = { "leaf l1 -lid 1 -laddr a", r#"{"name":"l1","lid":1,"laddr":"a"}"# },
    leaf_two_passes = {
        "leaf l1 -lid 1 -laddr a lid=2 laddr=b",
        r#"{"name":"l1","lid":[1,2],"laddr":["a","b"]}"#
    },
    dbg_empty = { "dbg", r#"{"opts":{}}"# },
    dbg_merges = { "dbg a=1 b=2 a=3", r#"{"opts":{"a":"3","b":"2"}}"# },
    the_command = { "the-command x y", "command arguments: x y" },
)]
fn demo_commands(line: &str, expected: &str) {
    similar_asserts::assert_eq!(run(&shell(), line), expected);
}

#[test]
fn tenants_start_from_the_defaults() {
    assert_eq!(
        shell().complete("tenant ").candidates,
        ["COMMON", "DEFAULT", "SINGLE", "MULTI"]
    );
}

#[test]
fn visited_tenants_become_candidates() {
    let shell = shell();
    run(&shell, "tenant acme");
    assert_eq!(shell.complete("tenant a").candidates, ["acme"]);
    assert_eq!(shell.cache().get(TENANTS_KEY).unwrap().len(), 5);
}

#[test]
fn configured_tenants_are_kept() {
    let mut candidates = IndexMap::new();
    candidates.insert(TENANTS_KEY.to_string(), vec!["lab".to_string()]);
    let shell = shell_with(ShellConfig {
        candidates,
        ..ShellConfig::default()
    });
    assert_eq!(shell.complete("tenant ").candidates, ["lab"]);
}

#[test]
fn node_rejects_both_alternatives() {
    let err = shell().execute("node n1 -nid 1 -nsig 2").unwrap_err();
    assert!(matches!(err, ShellError::Match(_)), "got {err:?}");
}

#[test]
fn dbg_rejects_plain_words() {
    let err = shell().execute("dbg verbose").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value 'verbose' for <opts>: 'verbose' is not key=value"
    );
}
