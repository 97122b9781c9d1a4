// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Host side of a grammar-driven shell.
//!
//! A [`Shell`] owns a [`Registry`] of [`Command`]s, each compiled from a
//! grammar string and typed arguments by `jc-grammar`. The host feeds it
//! lines with [`Shell::execute`] and partial lines with [`Shell::complete`];
//! how lines are read and how output is shown is up to the host.

mod builtins;
mod cache;
mod command;
mod config;
mod error;
mod registry;
mod shell;

pub use builtins::{detail, overview, COMMANDS_KEY};
pub use cache::CandidateCache;
pub use command::{Command, CommandBuilder, Handler, Invocation, Outcome};
pub use config::ShellConfig;
pub use error::ShellError;
pub use registry::Registry;
pub use shell::{Completion, Shell};
