//! Built-in command specs

use crate::prelude::*;

#[test]
fn help_lists_commands_sorted() {
    cli()
        .args(&["-c", "help"])
        .passes()
        .stdout_has("Commands:\n  dbg ")
        .stdout_has("  tenant       Enter the tenant where you want to go\n")
        .stdout_has("  the-command  Echo the words that follow\n");
}

#[test]
fn help_details_named_commands() {
    cli()
        .args(&["-c", "help node"])
        .passes()
        .stdout_eq(
            "node - Run the node\n  syntax: node name [nid|nsig]?\n  name  Enter a string (required)\n  nid   Enter a number (default: 0)\n  nsig  Enter a number (default: 0)\n",
        );
}

#[test]
fn help_for_unknown_command_fails() {
    cli()
        .args(&["-c", "help nope"])
        .fails()
        .stderr_has("unknown command: nope");
}

#[test]
fn exit_ends_the_session_cleanly() {
    cli().args(&["-c", "exit"]).passes().stdout_eq("");
}
