//! Line execution specs
//!
//! Verify that demo commands bind their arguments and print them.

use crate::prelude::*;

#[test]
fn single_line_prints_bindings() {
    cli()
        .args(&["-c", "tenant acme -tid 7"])
        .passes()
        .stdout_eq("{\"tname\":\"acme\",\"tid\":7}\n");
}

#[test]
fn optional_group_keeps_defaults() {
    cli()
        .args(&["-c", "node n1"])
        .passes()
        .stdout_eq("{\"name\":\"n1\",\"nid\":0,\"nsig\":0}\n");
}

#[test]
fn repeated_group_collects_lists() {
    cli()
        .args(&["-c", "leaf l1 -lid 1 -laddr a -lid 2 -laddr b"])
        .passes()
        .stdout_eq("{\"name\":\"l1\",\"lid\":[1,2],\"laddr\":[\"a\",\"b\"]}\n");
}

#[test]
fn free_form_map_merges() {
    cli()
        .args(&["-c", "dbg level=2 trace=on"])
        .passes()
        .stdout_eq("{\"opts\":{\"level\":\"2\",\"trace\":\"on\"}}\n");
}

#[test]
fn quoted_words_stay_together() {
    cli()
        .args(&["-c", "the-command 'a b' c"])
        .passes()
        .stdout_eq("command arguments: a b c\n");
}

#[test]
fn repl_runs_lines_until_exit() {
    cli()
        .args(&["--quiet"])
        .stdin("tenant acme\n\nnode n1 nid=4\nexit\ntenant never\n")
        .passes()
        .stdout_eq(
            "{\"tname\":\"acme\",\"tid\":0}\n{\"name\":\"n1\",\"nid\":4,\"nsig\":0}\n",
        );
}

#[test]
fn repl_ends_at_end_of_input() {
    cli()
        .args(&["--quiet"])
        .stdin("node n1\n")
        .passes()
        .stdout_has("\"name\":\"n1\"");
}

#[test]
fn prompt_is_printed_before_each_line() {
    cli()
        .args(&["--prompt", "jc> "])
        .stdin("exit\n")
        .passes()
        .stdout_eq("jc> ");
}
