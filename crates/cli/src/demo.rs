// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demonstration commands registered by the `jc` binary.

use indexmap::IndexMap;
use jc_grammar::{Argument, Dynamic, Int, Map, Str, Value};
use jc_shell::{Command, Invocation, Outcome, Shell, ShellError};

/// Candidate cache key for tenant names.
pub const TENANTS_KEY: &str = "tenants";

/// Tenants offered before any are configured or created.
pub const DEFAULT_TENANTS: [&str; 4] = ["COMMON", "DEFAULT", "SINGLE", "MULTI"];

pub fn register(shell: &mut Shell) -> Result<(), ShellError> {
    if shell.cache().get(TENANTS_KEY).is_none() {
        shell.cache().set(TENANTS_KEY, DEFAULT_TENANTS);
    }

    shell.register(
        Command::builder("tenant", |inv| {
            if let Some(name) = inv.str("tname") {
                inv.cache().add(TENANTS_KEY, name);
            }
            bindings_json(inv)
        })
        .description("Enter the tenant where you want to go")
        .grammar("tenant tname [tid]?")
        .arg(Argument::new(
            "tname",
            Dynamic::new(TENANTS_KEY).fallback(DEFAULT_TENANTS),
        ))
        .arg(Argument::new("tid", Int).default_value(0)),
    )?;

    shell.register(
        Command::builder("node", bindings_json)
            .description("Run the node")
            .grammar("node name [nid|nsig]?")
            .arg(Argument::new("name", Str))
            .arg(Argument::new("nid", Int).default_value(0))
            .arg(Argument::new("nsig", Int).default_value(0)),
    )?;

    shell.register(
        Command::builder("leaf", bindings_json)
            .description("Attach one or more leaves to a node")
            .grammar("leaf name [lid laddr]+")
            .arg(Argument::new("name", Str))
            .arg(Argument::new("lid", Int))
            .arg(Argument::new("laddr", Str)),
    )?;

    shell.register(
        Command::builder("dbg", bindings_json)
            .description("Collect key=value settings")
            .grammar("dbg [opts]@")
            .arg(Argument::new("opts", Map).default_value(Value::Map(IndexMap::new()))),
    )?;

    shell.register(
        Command::builder("the-command", |inv| {
            let words: Vec<String> = inv.items("words").iter().map(Value::to_string).collect();
            Ok(Outcome::Output(format!(
                "command arguments: {}",
                words.join(" ")
            )))
        })
        .description("Echo the words that follow")
        .grammar("the-command [words]@")
        .arg(Argument::new("words", Str).default_value(Value::List(Vec::new()))),
    )?;

    Ok(())
}

/// Render every binding as one JSON object, in declaration order.
fn bindings_json(inv: &Invocation<'_>) -> Result<Outcome, ShellError> {
    let object: IndexMap<&str, Option<&Value>> = inv.bindings().iter().collect();
    let text = serde_json::to_string(&object).map_err(|e| inv.fail(e.to_string()))?;
    Ok(Outcome::Output(text))
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
