//! Completion specs
//!
//! A line ending in `?` prints toolbar help and candidates.

use crate::prelude::*;

#[test]
fn empty_line_lists_commands() {
    cli()
        .args(&["-c", "?"])
        .passes()
        .stdout_has("help | exit | tenant | node | leaf | dbg | the-command\n");
}

#[test]
fn tenant_names_come_from_the_defaults() {
    cli()
        .args(&["-c", "tenant ?"])
        .passes()
        .stdout_eq("tname: Enter a tenant name\nCOMMON  DEFAULT  SINGLE  MULTI\n");
}

#[test]
fn partial_tenant_name_filters() {
    cli()
        .args(&["-c", "tenant M?"])
        .passes()
        .stdout_eq("tname: Enter a tenant name\nMULTI\n");
}

#[test]
fn flags_follow_positionals() {
    cli()
        .args(&["-c", "node n1 ?"])
        .passes()
        .stdout_eq("-nid | -nsig\n-nid  -nsig\n");
}

#[test]
fn flag_value_shows_type_help() {
    cli()
        .args(&["-c", "tenant acme -tid ?"])
        .passes()
        .stdout_eq("tid: Enter a number\n");
}

#[test]
fn visited_tenants_are_offered_later() {
    cli()
        .args(&["--quiet"])
        .stdin("tenant acme\ntenant a?\n")
        .passes()
        .stdout_has("tname: Enter a tenant name\nacme\n");
}

#[test]
fn help_completes_command_names() {
    cli()
        .args(&["-c", "help t?"])
        .passes()
        .stdout_eq("names: Enter a command name\ntenant  the-command\n");
}
