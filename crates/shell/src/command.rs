// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command descriptors and the per-call view handed to handlers.

use crate::cache::CandidateCache;
use crate::error::ShellError;
use crate::registry::Registry;
use jc_grammar::{
    Argument, ArgumentSet, Bindings, CommandSyntax, ParseTree, ParserConfig, Rule, Value,
};
use std::fmt;
use std::sync::Arc;

/// What a handler asks the shell to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text for the host to print.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the read loop.
    Exit,
}

pub type Handler = Arc<dyn Fn(&Invocation<'_>) -> Result<Outcome, ShellError> + Send + Sync>;

/// One registered command: its name, help text, compiled syntax and callback.
#[derive(Clone)]
pub struct Command {
    name: String,
    description: String,
    syntax: CommandSyntax,
    handler: Handler,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("grammar", &self.syntax.grammar().source())
            .finish_non_exhaustive()
    }
}

impl Command {
    /// Start declaring a command.
    ///
    /// # Examples
    ///
    /// ```
    /// use jc_grammar::{Argument, Int, ParserConfig, Str};
    /// use jc_shell::{Command, Outcome};
    ///
    /// let command = Command::builder("tenant", |inv| {
    ///     Ok(Outcome::Output(format!("tenant {}", inv.str("tname").unwrap_or("?"))))
    /// })
    /// .description("Display tenant information")
    /// .grammar("tenant tname [tid]?")
    /// .arg(Argument::new("tname", Str))
    /// .arg(Argument::new("tid", Int).default_value(0))
    /// .build(&ParserConfig::default())?;
    /// assert_eq!(command.name(), "tenant");
    /// # Ok::<(), jc_shell::ShellError>(())
    /// ```
    pub fn builder<F>(name: impl Into<String>, handler: F) -> CommandBuilder
    where
        F: Fn(&Invocation<'_>) -> Result<Outcome, ShellError> + Send + Sync + 'static,
    {
        CommandBuilder {
            name: name.into(),
            description: String::new(),
            grammar: None,
            args: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn syntax(&self) -> &CommandSyntax {
        &self.syntax
    }

    pub fn arguments(&self) -> &ArgumentSet {
        self.syntax.arguments()
    }

    pub fn rules(&self) -> &[Rule] {
        self.syntax.grammar().rules()
    }

    pub fn tree(&self) -> &ParseTree {
        self.syntax.tree()
    }

    pub(crate) fn run(&self, invocation: &Invocation<'_>) -> Result<Outcome, ShellError> {
        (self.handler)(invocation)
    }
}

/// Collects a command declaration; [`CommandBuilder::build`] compiles it.
pub struct CommandBuilder {
    name: String,
    description: String,
    grammar: Option<String>,
    args: Vec<Argument>,
    handler: Handler,
}

impl CommandBuilder {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Grammar string, starting with the command name. Without one, every
    /// argument is positional in declaration order.
    pub fn grammar(mut self, source: impl Into<String>) -> Self {
        self.grammar = Some(source.into());
        self
    }

    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(self, config: &ParserConfig) -> Result<Command, ShellError> {
        let mut args = ArgumentSet::new();
        for arg in self.args {
            args.push(arg)?;
        }
        let syntax = match &self.grammar {
            Some(source) => {
                let syntax =
                    CommandSyntax::compile_with_config(source, args, config).map_err(|inner| {
                        ShellError::InvalidGrammar {
                            command: self.name.clone(),
                            inner: Box::new(inner),
                            source_text: source.clone(),
                        }
                    })?;
                if syntax.command() != self.name {
                    return Err(ShellError::NameMismatch {
                        name: self.name,
                        grammar: syntax.command().to_string(),
                    });
                }
                syntax
            }
            None => CommandSyntax::from_arguments(&self.name, args)?,
        };
        tracing::debug!(command = %self.name, grammar = syntax.grammar().source(), "compiled command");
        Ok(Command {
            name: self.name,
            description: self.description,
            syntax,
            handler: self.handler,
        })
    }
}

/// A matched line, as seen by a handler.
pub struct Invocation<'a> {
    pub(crate) command: &'a Command,
    pub(crate) bindings: Bindings<'a>,
    pub(crate) registry: &'a Registry,
    pub(crate) cache: &'a CandidateCache,
    pub(crate) line: &'a str,
}

impl<'a> Invocation<'a> {
    pub fn command(&self) -> &'a Command {
        self.command
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Every value of a repeatable argument; empty when it has none.
    pub fn items(&self, name: &str) -> &[Value] {
        match self.get(name) {
            Some(value) => value.items(),
            None => &[],
        }
    }

    pub fn bindings(&self) -> &Bindings<'a> {
        &self.bindings
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn cache(&self) -> &'a CandidateCache {
        self.cache
    }

    /// The full input line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Handler failure attributed to this command.
    pub fn fail(&self, message: impl Into<String>) -> ShellError {
        ShellError::handler(self.command.name(), message)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
