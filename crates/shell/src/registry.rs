// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The commands known to one shell.

use crate::command::Command;
use crate::error::ShellError;
use indexmap::IndexMap;

/// Commands by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: IndexMap<String, Command>,
    reject_duplicates: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail [`Registry::insert`] on a taken name instead of replacing.
    pub fn reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }

    pub fn insert(&mut self, command: Command) -> Result<(), ShellError> {
        let name = command.name().to_string();
        if self.commands.contains_key(&name) {
            if self.reject_duplicates {
                return Err(ShellError::DuplicateCommand(name));
            }
            tracing::warn!(command = %name, "replacing registered command");
        }
        self.commands.insert(name, command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
