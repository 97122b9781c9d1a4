// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line execution and completion over a registry of commands.

use crate::builtins::{self, COMMANDS_KEY};
use crate::cache::CandidateCache;
use crate::command::{CommandBuilder, Invocation, Outcome};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::registry::Registry;
use jc_grammar::{split_partial, tokenize, CompletionContext};
use std::sync::Arc;

/// What the host shows for a partially typed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Help for the next token, on one line.
    pub toolbar: String,
    /// Replacements for the token under the cursor.
    pub candidates: Vec<String>,
}

/// An interactive shell: its commands, candidate cache and settings.
///
/// # Examples
///
/// ```
/// use jc_grammar::{Argument, Str};
/// use jc_shell::{Command, Outcome, Shell, ShellConfig};
///
/// let mut shell = Shell::new(ShellConfig::default())?;
/// shell.register(
///     Command::builder("greet", |inv| {
///         Ok(Outcome::Output(format!("hello {}", inv.str("who").unwrap_or_default())))
///     })
///     .arg(Argument::new("who", Str)),
/// )?;
///
/// assert_eq!(shell.execute("greet world")?, Outcome::Output("hello world".into()));
/// assert_eq!(shell.complete("gr").candidates, ["greet"]);
/// # Ok::<(), jc_shell::ShellError>(())
/// ```
#[derive(Debug)]
pub struct Shell {
    registry: Registry,
    cache: Arc<CandidateCache>,
    config: ShellConfig,
}

impl Shell {
    /// A shell with the built-in `help` and `exit` commands, its cache
    /// seeded from `config.candidates`.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let cache = CandidateCache::new();
        for (key, items) in &config.candidates {
            cache.set(key, items.iter().cloned());
        }
        let mut shell = Self {
            registry: Registry::new().reject_duplicates(config.reject_duplicate_commands),
            cache: Arc::new(cache),
            config,
        };
        shell.register(builtins::help())?;
        shell.register(builtins::exit())?;
        tracing::info!(prompt = %shell.config.prompt, "shell ready");
        Ok(shell)
    }

    /// Compile and add a command.
    pub fn register(&mut self, builder: CommandBuilder) -> Result<(), ShellError> {
        let command = builder.build(&self.config.parser_config())?;
        self.registry.insert(command)?;
        self.cache.set(COMMANDS_KEY, self.registry.names());
        Ok(())
    }

    /// Run one input line.
    ///
    /// A blank line does nothing. Errors leave the shell usable; the host
    /// reports them and reads the next line.
    pub fn execute(&self, line: &str) -> Result<Outcome, ShellError> {
        let tokens = tokenize(line)?;
        let Some((head, rest)) = tokens.split_first() else {
            return Ok(Outcome::Silent);
        };
        let command = self
            .registry
            .get(&head.value)
            .ok_or_else(|| ShellError::UnknownCommand(head.value.clone()))?;
        let bindings = command.syntax().bind(rest)?;
        tracing::debug!(command = command.name(), args = rest.len(), "executing");

        let invocation = Invocation {
            command,
            bindings,
            registry: &self.registry,
            cache: &self.cache,
            line,
        };
        command.run(&invocation)
    }

    /// Toolbar help and candidates for the token being typed at the end of
    /// `line`. Never fails; a line that stops matching yields what was
    /// reachable before the first bad token.
    pub fn complete(&self, line: &str) -> Completion {
        let (committed, partial) = split_partial(line);
        let separator = &self.config.toolbar_separator;

        let Some((head, rest)) = committed.split_first() else {
            let candidates: Vec<String> = self
                .registry
                .names()
                .filter(|name| name.starts_with(partial.as_str()))
                .map(String::from)
                .collect();
            return Completion {
                toolbar: candidates.join(separator),
                candidates,
            };
        };

        let Some(command) = self.registry.get(&head.value) else {
            tracing::debug!(command = %head.value, "no completion for unknown command");
            return Completion::default();
        };
        let ctx = CompletionContext::new(line).with_source(&*self.cache);
        let suggestions = command.syntax().suggest(rest, &partial, &ctx);
        Completion {
            toolbar: suggestions.toolbar(separator),
            candidates: suggestions.candidates,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn cache(&self) -> &Arc<CandidateCache> {
        &self.cache
    }
}

#[cfg(test)]
#[path = "shell_tests/mod.rs"]
mod tests;
