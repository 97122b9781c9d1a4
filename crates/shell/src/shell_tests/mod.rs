// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell execution and completion tests.

mod complete;
mod execute;

use super::*;
use crate::command::Command;
use jc_grammar::{Argument, Dynamic, Int, Str, Value};

/// Echo every bound argument as `name=value`, in declaration order.
fn echo(inv: &Invocation<'_>) -> Result<Outcome, ShellError> {
    let parts: Vec<String> = inv
        .bindings()
        .iter()
        .map(|(name, value)| match value {
            Some(value) => format!("{name}={value}"),
            None => format!("{name}=-"),
        })
        .collect();
    Ok(Outcome::Output(parts.join(" ")))
}

pub(super) fn shell_with(config: ShellConfig) -> Shell {
    let mut shell = Shell::new(config).unwrap();
    shell
        .register(
            Command::builder("tenant", |inv| {
                let name = inv.str("tname").unwrap_or_default();
                inv.cache().add("tenants", name);
                echo(inv)
            })
            .grammar("tenant tname [tid]?")
            .arg(Argument::new(
                "tname",
                Dynamic::new("tenants").fallback(["COMMON", "DEFAULT"]),
            ))
            .arg(Argument::new("tid", Int).default_value(0)),
        )
        .unwrap();
    shell
        .register(
            Command::builder("node", echo)
                .grammar("node name [nid|nsig]?")
                .arg(Argument::new("name", Str))
                .arg(Argument::new("nid", Int).default_value(0))
                .arg(Argument::new("nsig", Str).default_value("")),
        )
        .unwrap();
    shell
        .register(
            Command::builder("leaf", echo)
                .grammar("leaf name [lid laddr]+")
                .arg(Argument::new("name", Str))
                .arg(Argument::new("lid", Int))
                .arg(Argument::new("laddr", Str)),
        )
        .unwrap();
    shell
        .register(Command::builder("fail", |inv| Err(inv.fail("it broke"))))
        .unwrap();
    shell
}

pub(super) fn shell() -> Shell {
    shell_with(ShellConfig::default())
}

pub(super) fn output(outcome: Outcome) -> String {
    match outcome {
        Outcome::Output(text) => text,
        other => panic!("expected output, got {other:?}"),
    }
}

pub(super) fn int(n: i64) -> Value {
    Value::Int(n)
}
