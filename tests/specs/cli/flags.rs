//! Command-line flag specs

use crate::prelude::*;

#[test]
fn version_flag() {
    cli().args(&["--version"]).passes().stdout_has("jc ");
}

#[test]
fn help_flag_mentions_completion() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--command <LINE>")
        .stdout_has("End a line with '?'");
}

#[test]
fn unknown_flag_fails() {
    cli()
        .args(&["--bogus"])
        .fails()
        .stderr_has("unexpected argument '--bogus'");
}

#[test]
fn quiet_suppresses_the_prompt() {
    cli()
        .args(&["-q"])
        .stdin("exit\n")
        .passes()
        .stdout_eq("");
}

#[test]
fn prompt_env_applies() {
    cli()
        .env("JC_PROMPT", "env> ")
        .stdin("exit\n")
        .passes()
        .stdout_eq("env> ");
}

#[test]
fn logs_go_to_stderr() {
    cli()
        .args(&["-c", "node n1"])
        .env("JC_LOG", "jc_shell=debug")
        .passes()
        .stdout_eq("{\"name\":\"n1\",\"nid\":0,\"nsig\":0}\n")
        .stderr_has("executing");
}
