// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument types: conversion, help and completion for one value domain.
//!
//! Every argument carries an `Arc<dyn ArgType>`. The built-in types cover
//! numbers, strings, fixed literals, `key=value` maps and candidate lists;
//! hosts add their own by implementing [`ArgType`].

use crate::value::{Repeat, Value};
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// Raised when an [`ArgType`] rejects a raw token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ConversionError {
    pub reason: String,
}

impl ConversionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Completion candidates supplied by the host at completion time.
///
/// Types that complete from live data (tenants, node names, ...) read them
/// through this trait instead of reaching into global state.
pub trait CandidateSource: Send + Sync {
    /// Candidates stored under `key`, or `None` if the host has none.
    fn candidates(&self, key: &str) -> Option<Vec<String>>;
}

/// What a type sees when asked for completions.
#[derive(Clone, Copy, Default)]
pub struct CompletionContext<'a> {
    /// The full buffer being edited.
    pub line: &'a str,
    source: Option<&'a dyn CandidateSource>,
}

impl<'a> CompletionContext<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, source: None }
    }

    pub fn with_source(mut self, source: &'a dyn CandidateSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Look up host candidates by key.
    pub fn lookup(&self, key: &str) -> Option<Vec<String>> {
        self.source.and_then(|source| source.candidates(key))
    }
}

impl fmt::Debug for CompletionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionContext")
            .field("line", &self.line)
            .field("source", &self.source.is_some())
            .finish()
    }
}

/// A pluggable single-value converter with help and completion.
pub trait ArgType: fmt::Debug + Send + Sync {
    /// Short name shown in listings (`int`, `str`, ...).
    fn name(&self) -> &str;

    /// Turn one raw token into a typed value.
    fn convert(&self, raw: &str) -> Result<Value, ConversionError>;

    /// Help line for the toolbar while `partial` is being typed.
    fn help(&self, partial: &str) -> String;

    /// Candidates for `partial`, or `None` when the type has no opinion.
    fn complete(&self, ctx: &CompletionContext<'_>, partial: &str) -> Option<Vec<String>> {
        let _ = (ctx, partial);
        None
    }

    /// How repeated matches of this type combine.
    fn repeat(&self) -> Repeat {
        Repeat::Append
    }
}

fn starting_with(items: impl IntoIterator<Item = String>, partial: &str) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| item.starts_with(partial))
        .collect()
}

/// Base-10 signed integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

impl ArgType for Int {
    fn name(&self) -> &str {
        "int"
    }

    fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
        raw.trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ConversionError::new(format!("'{raw}' is not a number")))
    }

    fn help(&self, _partial: &str) -> String {
        "Enter a number".to_string()
    }
}

/// Any string, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Str;

impl ArgType for Str {
    fn name(&self) -> &str {
        "str"
    }

    fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
        Ok(Value::Str(raw.to_string()))
    }

    fn help(&self, _partial: &str) -> String {
        "Enter a string".to_string()
    }
}

/// A fixed literal, echoed back on a match. Used for flag-like constants.
#[derive(Debug, Clone)]
pub struct Prefix {
    label: String,
}

impl Prefix {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl ArgType for Prefix {
    fn name(&self) -> &str {
        "prefix"
    }

    fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
        if raw == self.label {
            Ok(Value::Str(self.label.clone()))
        } else {
            Err(ConversionError::new(format!("expected '{}'", self.label)))
        }
    }

    fn help(&self, _partial: &str) -> String {
        self.label.clone()
    }

    fn complete(&self, _ctx: &CompletionContext<'_>, partial: &str) -> Option<Vec<String>> {
        Some(starting_with([self.label.clone()], partial))
    }
}

/// `key=value` pairs accumulated into one map.
#[derive(Debug, Clone, Copy, Default)]
pub struct Map;

impl ArgType for Map {
    fn name(&self) -> &str {
        "map"
    }

    fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
        match raw.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                let mut map = IndexMap::new();
                map.insert(key.to_string(), value.to_string());
                Ok(Value::Map(map))
            }
            _ => Err(ConversionError::new(format!("'{raw}' is not key=value"))),
        }
    }

    fn help(&self, _partial: &str) -> String {
        "Enter key=value".to_string()
    }

    fn repeat(&self) -> Repeat {
        Repeat::Merge
    }
}

/// One of a fixed set of strings.
#[derive(Debug, Clone)]
pub struct Choice {
    options: Vec<String>,
}

impl Choice {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArgType for Choice {
    fn name(&self) -> &str {
        "choice"
    }

    fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
        if self.options.iter().any(|option| option == raw) {
            Ok(Value::Str(raw.to_string()))
        } else {
            Err(ConversionError::new(format!(
                "expected one of {}",
                self.options.join(", ")
            )))
        }
    }

    fn help(&self, _partial: &str) -> String {
        format!("Choose one of {}", self.options.join(", "))
    }

    fn complete(&self, _ctx: &CompletionContext<'_>, partial: &str) -> Option<Vec<String>> {
        Some(starting_with(self.options.iter().cloned(), partial))
    }
}

/// A string completed from host candidates stored under `key`.
///
/// Falls back to a static list when the host has nothing cached yet.
#[derive(Debug, Clone)]
pub struct Dynamic {
    key: String,
    fallback: Vec<String>,
}

impl Dynamic {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fallback: Vec::new(),
        }
    }

    pub fn fallback<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback = items.into_iter().map(Into::into).collect();
        self
    }
}

impl ArgType for Dynamic {
    fn name(&self) -> &str {
        &self.key
    }

    fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
        Ok(Value::Str(raw.to_string()))
    }

    fn help(&self, _partial: &str) -> String {
        format!("Enter a {} name", self.key.trim_end_matches('s'))
    }

    fn complete(&self, ctx: &CompletionContext<'_>, partial: &str) -> Option<Vec<String>> {
        let items = ctx
            .lookup(&self.key)
            .unwrap_or_else(|| self.fallback.clone());
        Some(starting_with(items, partial))
    }
}

#[cfg(test)]
#[path = "argtype_tests.rs"]
mod tests;
