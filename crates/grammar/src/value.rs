// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed argument values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A converted argument value.
///
/// Scalars come out of an [`ArgType`](crate::ArgType) conversion. A `List`
/// appears once the same argument is matched a second time in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Str(String),
    Map(IndexMap<String, String>),
    List(Vec<Value>),
}

/// How repeated matches of one argument combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Second match promotes the scalar to a two-element list; later ones append.
    #[default]
    Append,
    /// Maps merge key by key; later keys win.
    Merge,
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// List items, or the value itself as a one-item slice.
    pub fn items(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Fold a newly matched value into this one.
    ///
    /// `matched` is how many values the argument already received in the
    /// current pass (at least 1 when this is called).
    pub(crate) fn accumulate(&mut self, next: Value, matched: usize, repeat: Repeat) {
        match (repeat, &mut *self, next) {
            (Repeat::Merge, Value::Map(existing), Value::Map(incoming)) => {
                existing.extend(incoming);
            }
            (_, Value::List(items), next) if matched > 1 => items.push(next),
            (_, current, next) => {
                let first = std::mem::replace(current, Value::List(Vec::with_capacity(2)));
                if let Value::List(items) = current {
                    items.push(first);
                    items.push(next);
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
