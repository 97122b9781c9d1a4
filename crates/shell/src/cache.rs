// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion candidates shared between command handlers and completion.

use jc_grammar::CandidateSource;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Keyed candidate lists.
///
/// Handlers write (a `tenant` command records the tenants it has seen);
/// completion reads through [`CandidateSource`].
#[derive(Debug, Default)]
pub struct CandidateCache {
    entries: RwLock<HashMap<String, Vec<String>>>,
}

impl CandidateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list under `key`.
    pub fn set<I, S>(&self, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.entries.write().insert(key.to_string(), items);
    }

    /// Append `item` under `key` unless it is already there.
    pub fn add(&self, key: &str, item: impl Into<String>) {
        let item = item.into();
        let mut entries = self.entries.write();
        let list = entries.entry(key.to_string()).or_default();
        if !list.contains(&item) {
            list.push(item);
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<String>> {
        self.entries.read().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<Vec<String>> {
        self.entries.write().remove(key)
    }

    /// Sorted keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl CandidateSource for CandidateCache {
    fn candidates(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
