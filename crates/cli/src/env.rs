// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

// --- Logging ---

/// Log filter directives: JC_LOG > RUST_LOG.
pub fn log_filter() -> Option<String> {
    non_empty("JC_LOG").or_else(|| non_empty("RUST_LOG"))
}

// --- Shell settings ---

pub fn config_path() -> Option<PathBuf> {
    non_empty("JC_CONFIG").map(PathBuf::from)
}

pub fn prompt() -> Option<String> {
    std::env::var("JC_PROMPT").ok()
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
