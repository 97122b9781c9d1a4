//! Input error specs
//!
//! Errors point into the line and leave the REPL running.

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    cli()
        .args(&["-c", "frobnicate now"])
        .fails()
        .stderr_eq("error: unknown command: frobnicate\n");
}

#[test]
fn extra_token_points_at_itself() {
    cli()
        .args(&["-c", "tenant acme bogus"])
        .fails()
        .stderr_eq(
            "error: too many arguments: <bogus>\n  --> column 13\n   |\n   | tenant acme bogus\n   |             ^^^^^\n",
        );
}

#[test]
fn unknown_flag_is_not_found() {
    cli()
        .args(&["-c", "node n1 -nbogus 3"])
        .fails()
        .stderr_has("error: <-nbogus> not found");
}

#[test]
fn bad_number_names_the_argument() {
    cli()
        .args(&["-c", "node n1 -nid twelve"])
        .fails()
        .stderr_has("invalid value 'twelve' for <nid>: 'twelve' is not a number")
        .stderr_has("   |              ^^^^^^");
}

#[test]
fn missing_positional_is_too_few() {
    cli()
        .args(&["-c", "tenant"])
        .fails()
        .stderr_eq("error: too few arguments: expected at least 1, got 0\n");
}

#[test]
fn flag_without_value_is_mandatory_missing() {
    cli()
        .args(&["-c", "tenant acme -tid"])
        .fails()
        .stderr_has("mandatory argument");
}

#[test]
fn unterminated_quote_fails() {
    cli()
        .args(&["-c", "tenant \"acme"])
        .fails()
        .stderr_has("unterminated double quote");
}

#[test]
fn single_line_failure_exits_with_one() {
    let run = cli().args(&["-c", "nope"]).fails();
    assert_eq!(run.code(), Some(1));
}

#[test]
fn repl_keeps_going_after_errors() {
    cli()
        .args(&["--quiet"])
        .stdin("tenant\nnope\nnode n1\n")
        .passes()
        .stdout_has("\"name\":\"n1\"")
        .stderr_has("too few arguments")
        .stderr_has("unknown command: nope");
}

#[test]
fn colors_can_be_forced() {
    cli()
        .args(&["-c", "nope"])
        .env("NO_COLOR", "0")
        .env("COLOR", "1")
        .fails()
        .stderr_has("\x1b[38;5;74merror:\x1b[0m");
}
