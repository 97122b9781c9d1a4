// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Matcher tests.

mod binding;
mod completion;
mod errors;
mod properties;

use super::*;
use crate::argtype::{Int, Str};
use crate::argument::Argument;
use crate::input::tokenize;
use crate::syntax::Grammar;
use crate::tree::build;
use crate::value::Value;
use indexmap::IndexMap;

/// A compiled command under test.
pub(super) struct Fixture {
    args: ArgumentSet,
    grammar: Grammar,
    tree: ParseTree,
}

impl Fixture {
    pub(super) fn new(source: &str, args: ArgumentSet) -> Self {
        let grammar = Grammar::parse(source).unwrap();
        let tree = build(&args, grammar.rules()).unwrap();
        Self {
            args,
            grammar,
            tree,
        }
    }

    pub(super) fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.tree, &self.args, self.grammar.rules())
    }

    /// Match `line` (arguments only) and return the bound values.
    pub(super) fn bind(&self, line: &str) -> Result<IndexMap<String, Value>, MatchError> {
        let tokens = tokenize(line).unwrap();
        self.matcher().match_tokens(&tokens).map(|b| b.to_map())
    }

    pub(super) fn suggest(&self, line: &str) -> Suggestions {
        let (committed, partial) = crate::input::split_partial(line);
        self.matcher()
            .suggest(&committed, &partial, &CompletionContext::new(line))
    }
}

/// Mandatory string arguments.
pub(super) fn strs(names: &[&str]) -> ArgumentSet {
    let mut set = ArgumentSet::new();
    for name in names {
        set.push(Argument::new(*name, Str)).unwrap();
    }
    set
}

pub(super) fn arg(name: &str) -> Argument {
    Argument::new(name, Str)
}

pub(super) fn int(name: &str) -> Argument {
    Argument::new(name, Int)
}

pub(super) fn set(args: Vec<Argument>) -> ArgumentSet {
    let mut set = ArgumentSet::new();
    for arg in args {
        set.push(arg).unwrap();
    }
    set
}

/// Values in declaration order.
pub(super) fn values(map: &IndexMap<String, Value>) -> Vec<Value> {
    map.values().cloned().collect()
}

pub(super) fn s(text: &str) -> Value {
    Value::from(text)
}

pub(super) fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}
