// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rules: the intermediate form between a grammar string and a parse tree.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// What a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Bare top-level word: a positional argument.
    Required,
    /// `<word>`: the literal must appear verbatim.
    Constant,
    /// Word inside an `@` group: accepts any token.
    FreeForm,
    /// Word inside a `? * + !` group: addressed as `-name value` or `name=value`.
    Named,
    /// `[...]?`
    ZeroOrOne,
    /// `[...]*`
    ZeroOrMore,
    /// `[...]+`
    OneOrMore,
    /// `[...]!`
    ExactlyOneOf,
    /// `[...]@`
    FreeFormGroup,
    /// Synthetic terminator of the top-level sequence.
    End,
}

impl RuleKind {
    /// Group kind for a suffix operator.
    pub fn from_operator(op: char) -> Option<RuleKind> {
        match op {
            '?' => Some(RuleKind::ZeroOrOne),
            '*' => Some(RuleKind::ZeroOrMore),
            '+' => Some(RuleKind::OneOrMore),
            '!' => Some(RuleKind::ExactlyOneOf),
            '@' => Some(RuleKind::FreeFormGroup),
            _ => None,
        }
    }

    /// Suffix operator for a group kind.
    pub fn operator(self) -> Option<char> {
        match self {
            RuleKind::ZeroOrOne => Some('?'),
            RuleKind::ZeroOrMore => Some('*'),
            RuleKind::OneOrMore => Some('+'),
            RuleKind::ExactlyOneOf => Some('!'),
            RuleKind::FreeFormGroup => Some('@'),
            _ => None,
        }
    }

    pub fn is_group(self) -> bool {
        self.operator().is_some()
    }

    /// Kind given to a plain word inside a group of this kind.
    pub(crate) fn member_kind(self) -> RuleKind {
        match self {
            RuleKind::FreeFormGroup => RuleKind::FreeForm,
            _ => RuleKind::Named,
        }
    }
}

/// Leaf name or nested alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    Name(String),
    Rules(Vec<Rule>),
    Empty,
}

/// One compiled grammar element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,
    /// Ordinal among siblings. Restarts at 0 after every `|`, so 0 marks the
    /// first item of an alternative.
    pub position: usize,
    pub payload: Payload,
    #[serde(default)]
    pub span: Span,
}

impl Rule {
    pub fn leaf(kind: RuleKind, position: usize, name: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            position,
            payload: Payload::Name(name.into()),
            span,
        }
    }

    pub fn group(kind: RuleKind, position: usize, rules: Vec<Rule>, span: Span) -> Self {
        Self {
            kind,
            position,
            payload: Payload::Rules(rules),
            span,
        }
    }

    pub fn end(position: usize, span: Span) -> Self {
        Self {
            kind: RuleKind::End,
            position,
            payload: Payload::Empty,
            span,
        }
    }

    pub fn is_required(&self) -> bool {
        self.kind == RuleKind::Required
    }

    pub fn is_constant(&self) -> bool {
        self.kind == RuleKind::Constant
    }

    pub fn is_free_form(&self) -> bool {
        self.kind == RuleKind::FreeForm
    }

    pub fn is_named(&self) -> bool {
        self.kind == RuleKind::Named
    }

    pub fn is_zero_or_one(&self) -> bool {
        self.kind == RuleKind::ZeroOrOne
    }

    pub fn is_zero_or_more(&self) -> bool {
        self.kind == RuleKind::ZeroOrMore
    }

    pub fn is_one_or_more(&self) -> bool {
        self.kind == RuleKind::OneOrMore
    }

    pub fn is_exactly_one_of(&self) -> bool {
        self.kind == RuleKind::ExactlyOneOf
    }

    pub fn is_free_form_group(&self) -> bool {
        self.kind == RuleKind::FreeFormGroup
    }

    pub fn is_end(&self) -> bool {
        self.kind == RuleKind::End
    }

    /// Groups whose body may be skipped entirely.
    pub fn is_optional(&self) -> bool {
        matches!(
            self.kind,
            RuleKind::ZeroOrOne | RuleKind::ZeroOrMore | RuleKind::FreeFormGroup
        )
    }

    /// Groups that loop back for another pass.
    pub fn is_repeatable(&self) -> bool {
        matches!(
            self.kind,
            RuleKind::ZeroOrMore | RuleKind::OneOrMore | RuleKind::FreeFormGroup
        )
    }

    pub fn has_nested_rules(&self) -> bool {
        matches!(self.payload, Payload::Rules(_))
    }

    pub fn name(&self) -> Option<&str> {
        match &self.payload {
            Payload::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        match &self.payload {
            Payload::Rules(rules) => rules,
            _ => &[],
        }
    }

    /// Short description for error messages.
    pub(crate) fn describe(&self) -> String {
        match (&self.payload, self.kind.operator()) {
            (Payload::Name(name), _) => name.clone(),
            (_, Some(op)) => format!("[...]{op}"),
            _ => "end".to_string(),
        }
    }
}

/// Fewest tokens a line needs before matching is worth attempting: one per
/// Required rule and one per OneOrMore group.
pub fn minimum_argument_count(rules: &[Rule]) -> usize {
    rules
        .iter()
        .filter(|rule| rule.is_required() || rule.is_one_or_more())
        .count()
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
