// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell configuration, loaded from TOML.
//!
//! ```toml
//! prompt = "jc> "
//! max_nesting_depth = 8
//!
//! [candidates]
//! tenants = ["COMMON", "DEFAULT"]
//! ```

use crate::error::ShellError;
use indexmap::IndexMap;
use jc_grammar::ParserConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub prompt: String,
    /// Bracket nesting limit for grammars (0 = unlimited).
    pub max_nesting_depth: usize,
    /// Joins help entries in the completion toolbar.
    pub toolbar_separator: String,
    /// Fail registration of a name that is already taken instead of
    /// replacing the earlier command.
    pub reject_duplicate_commands: bool,
    /// Static completion candidates seeded into the cache, by key.
    pub candidates: IndexMap<String, Vec<String>>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            max_nesting_depth: ParserConfig::default().max_nesting_depth,
            toolbar_separator: " | ".to_string(),
            reject_duplicate_commands: false,
            candidates: IndexMap::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ShellError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ShellError> {
        let content = std::fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded shell config");
        Ok(config)
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            max_nesting_depth: self.max_nesting_depth,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
