// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands every shell starts with: `help` and `exit`.

use crate::command::{Command, CommandBuilder, Invocation, Outcome};
use crate::error::ShellError;
use crate::registry::Registry;
use jc_grammar::{Argument, Dynamic, Value};
use std::fmt::Write;

/// Candidate cache key holding the registered command names.
pub const COMMANDS_KEY: &str = "commands";

pub(crate) fn help() -> CommandBuilder {
    Command::builder("help", run_help)
        .description("List commands, or describe the named ones")
        .grammar("help [names]@")
        .arg(
            Argument::new("names", Dynamic::new(COMMANDS_KEY))
                .default_value(Value::List(Vec::new()))
                .description("Enter a command name"),
        )
}

pub(crate) fn exit() -> CommandBuilder {
    Command::builder("exit", |_| Ok(Outcome::Exit)).description("Leave the shell")
}

fn run_help(inv: &Invocation<'_>) -> Result<Outcome, ShellError> {
    let registry = inv.registry();
    let names = inv.items("names");
    if names.is_empty() {
        return Ok(Outcome::Output(overview(registry)));
    }
    let mut sections = Vec::with_capacity(names.len());
    for name in names {
        let name = name.to_string();
        let command = registry
            .get(&name)
            .ok_or(ShellError::UnknownCommand(name))?;
        sections.push(detail(command));
    }
    Ok(Outcome::Output(sections.join("\n\n")))
}

/// One line per command, sorted by name.
pub fn overview(registry: &Registry) -> String {
    let mut commands: Vec<_> = registry.iter().collect();
    commands.sort_by(|a, b| a.name().cmp(b.name()));
    let width = commands.iter().map(|c| c.name().len()).max().unwrap_or(0);

    let mut out = String::from("Commands:");
    for command in commands {
        let line = format!("  {:<width$}  {}", command.name(), command.description());
        let _ = write!(out, "\n{}", line.trim_end());
    }
    out
}

/// Description, grammar and arguments of one command.
pub fn detail(command: &Command) -> String {
    let mut out = command.name().to_string();
    if !command.description().is_empty() {
        let _ = write!(out, " - {}", command.description());
    }
    let _ = write!(out, "\n  syntax: {}", command.syntax().grammar().source());

    let args = command.arguments();
    let width = args.names().map(str::len).max().unwrap_or(0);
    for arg in args.iter() {
        let default = match arg.default() {
            Some(value) => format!("default: {value}"),
            None => "required".to_string(),
        };
        let _ = write!(
            out,
            "\n  {:<width$}  {} ({default})",
            arg.name(),
            arg.help("")
        );
    }
    out
}

#[cfg(test)]
#[path = "builtins_tests.rs"]
mod tests;
