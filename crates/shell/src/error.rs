// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell errors.

use jc_grammar::{diagnostic_context, GrammarError, LexerError, MatchError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while registering commands or running a line.
///
/// Registration errors ([`ShellError::InvalidGrammar`], [`ShellError::NameMismatch`],
/// [`ShellError::DuplicateCommand`]) are programming mistakes. Everything
/// else is reported for one line and the shell carries on.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A command's grammar failed to compile.
    #[error("invalid grammar for '{command}':\n{}", grammar_diagnostic(inner, source_text))]
    InvalidGrammar {
        command: String,
        inner: Box<GrammarError>,
        source_text: String,
    },

    /// Grammar problem with no source text to point into.
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// The line did not fit the command's grammar.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The line could not be split into tokens.
    #[error(transparent)]
    Lexer(#[from] LexerError),

    /// No command is registered under this name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The grammar string starts with a different command name.
    #[error("command '{name}' has a grammar for '{grammar}'")]
    NameMismatch { name: String, grammar: String },

    /// A second command with the same name, when duplicates are rejected.
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    /// A command callback failed.
    #[error("{command}: {message}")]
    Handler { command: String, message: String },

    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ShellConfig`](crate::ShellConfig).
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl ShellError {
    /// Build a handler failure for `command`.
    pub fn handler(command: impl Into<String>, message: impl Into<String>) -> Self {
        ShellError::Handler {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Caret diagnostic against the input `line`, for errors tied to a token.
    pub fn diagnostic(&self, line: &str) -> Option<String> {
        match self {
            ShellError::Match(err) => err.diagnostic(line),
            ShellError::Lexer(err) => Some(diagnostic_context(line, err.span(), &err.to_string())),
            _ => None,
        }
    }
}

fn grammar_diagnostic(err: &GrammarError, source: &str) -> String {
    err.diagnostic(source).unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
