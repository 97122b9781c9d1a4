// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammar parser tests.

mod invalid;
mod valid;

use super::*;

/// Compact rendering of a rule list for assertions:
/// `Required(f1) ZeroOrOne[Named(f2)|Named(f3)] End`.
pub(super) fn shape(rules: &[Rule]) -> String {
    rules.iter().map(shape_rule).collect::<Vec<_>>().join(" ")
}

fn shape_rule(rule: &Rule) -> String {
    match rule.name() {
        Some(name) => format!("{:?}({name})", rule.kind),
        None if rule.has_nested_rules() => {
            let mut out = format!("{:?}[", rule.kind);
            for (i, child) in rule.rules().iter().enumerate() {
                if i > 0 {
                    out.push(if child.position == 0 { '|' } else { ' ' });
                }
                out.push_str(&shape_rule(child));
            }
            out.push(']');
            out
        }
        None => format!("{:?}", rule.kind),
    }
}

pub(super) fn parse_shape(source: &str) -> String {
    let grammar = Grammar::parse(source).unwrap();
    shape(grammar.rules())
}
