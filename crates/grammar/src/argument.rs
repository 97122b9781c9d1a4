// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declared arguments and per-invocation bindings.
//!
//! An [`ArgumentSet`] is declared once per command and never mutated by
//! matching. Each matching pass works on its own [`Bindings`], created by
//! [`ArgumentSet::index`], so concurrent invocations of one command don't
//! share state.

use crate::argtype::ArgType;
use crate::error::GrammarError;
use crate::value::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// Index of an argument inside its [`ArgumentSet`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArgId(usize);

impl ArgId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One declared parameter of a command.
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    ty: Arc<dyn ArgType>,
    default: Option<Value>,
    description: Option<String>,
}

impl Argument {
    /// Declare a mandatory argument.
    pub fn new(name: impl Into<String>, ty: impl ArgType + 'static) -> Self {
        Self::with_type(name, Arc::new(ty))
    }

    /// Declare a mandatory argument with a shared type.
    pub fn with_type(name: impl Into<String>, ty: Arc<dyn ArgType>) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            description: None,
        }
    }

    /// Give the argument a default, making it optional.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Help text shown in the toolbar instead of the type's own.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &dyn ArgType {
        self.ty.as_ref()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn help(&self, partial: &str) -> String {
        match &self.description {
            Some(text) => text.clone(),
            None => self.ty.help(partial),
        }
    }

    /// An argument without a default must receive a value.
    pub fn is_mandatory(&self) -> bool {
        self.default.is_none()
    }
}

/// Ordered, name-indexed arguments of one command.
#[derive(Debug, Clone, Default)]
pub struct ArgumentSet {
    args: IndexMap<String, Argument>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument, rejecting duplicate names.
    pub fn push(&mut self, arg: Argument) -> Result<ArgId, GrammarError> {
        if self.args.contains_key(arg.name()) {
            return Err(GrammarError::DuplicateArgument {
                name: arg.name().to_string(),
            });
        }
        let (index, _) = self.args.insert_full(arg.name().to_string(), arg);
        Ok(ArgId(index))
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, arg: Argument) -> Result<Self, GrammarError> {
        self.push(arg)?;
        Ok(self)
    }

    pub fn id_of(&self, name: &str) -> Option<ArgId> {
        self.args.get_index_of(name).map(ArgId)
    }

    pub fn get(&self, id: ArgId) -> Option<&Argument> {
        self.args.get_index(id.0).map(|(_, arg)| arg)
    }

    pub fn by_name(&self, name: &str) -> Option<&Argument> {
        self.args.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.args.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.args.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Start a matching pass: every value back to its default, nothing matched.
    pub fn index(&self) -> Bindings<'_> {
        Bindings {
            args: self,
            slots: self
                .args
                .values()
                .map(|arg| Slot {
                    value: arg.default.clone(),
                    matched: 0,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    value: Option<Value>,
    matched: usize,
}

/// Values bound to one command's arguments during one matching pass.
#[derive(Debug, Clone)]
pub struct Bindings<'a> {
    args: &'a ArgumentSet,
    slots: Vec<Slot>,
}

impl PartialEq for Bindings<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<'a> Bindings<'a> {
    /// Store a converted value, promoting repeats per the argument's type.
    pub fn bind(&mut self, id: ArgId, value: Value) {
        let Some(arg) = self.args.get(id) else {
            return;
        };
        let repeat = arg.ty().repeat();
        let Some(slot) = self.slots.get_mut(id.0) else {
            return;
        };
        match (&mut slot.value, slot.matched) {
            (Some(current), matched) if matched > 0 => current.accumulate(value, matched, repeat),
            (current, _) => *current = Some(value),
        }
        slot.matched += 1;
    }

    /// Bound value by name; the default if the argument never matched.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let id = self.args.id_of(name)?;
        self.value(id)
    }

    pub fn value(&self, id: ArgId) -> Option<&Value> {
        self.slots.get(id.0).and_then(|slot| slot.value.as_ref())
    }

    /// How many times the argument matched in this pass.
    pub fn matched(&self, name: &str) -> usize {
        self.args
            .id_of(name)
            .and_then(|id| self.slots.get(id.0))
            .map_or(0, |slot| slot.matched)
    }

    /// First mandatory argument still without a value.
    pub fn first_unbound(&self) -> Option<&'a Argument> {
        self.args
            .iter()
            .zip(&self.slots)
            .find(|(_, slot)| slot.value.is_none())
            .map(|(arg, _)| arg)
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Option<&Value>)> + '_ {
        self.args
            .names()
            .zip(self.slots.iter().map(|slot| slot.value.as_ref()))
    }

    /// Values in declaration order, for positional callbacks.
    pub fn values(&self) -> Vec<Option<Value>> {
        self.slots.iter().map(|slot| slot.value.clone()).collect()
    }

    /// Present values keyed by argument name.
    pub fn to_map(&self) -> IndexMap<String, Value> {
        self.iter()
            .filter_map(|(name, value)| Some((name.to_string(), value?.clone())))
            .collect()
    }

    pub fn arguments(&self) -> &'a ArgumentSet {
        self.args
    }
}

#[cfg(test)]
#[path = "argument_tests.rs"]
mod tests;
