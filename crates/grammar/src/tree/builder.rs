// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compile a rule list into a [`ParseTree`].

use super::{NodeId, NodeKind, ParseTree};
use crate::argument::{ArgId, ArgumentSet};
use crate::error::GrammarError;
use crate::rule::{Rule, RuleKind};

/// Build the parse tree for `rules`, resolving names against `args`.
///
/// Every name in the grammar except constants must be a declared argument.
///
/// # Examples
///
/// ```
/// use jc_grammar::{build, Argument, ArgumentSet, Grammar, Int, Str};
///
/// let args = ArgumentSet::new()
///     .with(Argument::new("tname", Str))?
///     .with(Argument::new("tid", Int).default_value(0))?;
/// let grammar = Grammar::parse("tenant tname [tid]?")?;
/// let tree = build(&args, grammar.rules())?;
/// assert!(tree.end().is_some());
/// # Ok::<(), jc_grammar::GrammarError>(())
/// ```
pub fn build(args: &ArgumentSet, rules: &[Rule]) -> Result<ParseTree, GrammarError> {
    let mut builder = Builder {
        args,
        tree: ParseTree::new(),
    };
    let mut tail = builder.tree.root();
    let mut ended = false;
    for rule in rules {
        if ended {
            return Err(GrammarError::RuleAfterEnd {
                rule: rule.describe(),
            });
        }
        tail = builder.attach(tail, rule, 0)?;
        ended = rule.is_end();
    }
    tracing::debug!(nodes = builder.tree.len(), "built parse tree");
    Ok(builder.tree)
}

struct Builder<'a> {
    args: &'a ArgumentSet,
    tree: ParseTree,
}

impl Builder<'_> {
    fn lookup(&self, rule: &Rule) -> Result<(ArgId, String), GrammarError> {
        let name = rule.name().unwrap_or_default();
        match self.args.id_of(name) {
            Some(id) => Ok((id, name.to_string())),
            None => Err(GrammarError::UndeclaredArgument {
                name: name.to_string(),
                span: rule.span,
            }),
        }
    }

    fn leaf(&mut self, tail: NodeId, kind: NodeKind, label: String) -> Result<NodeId, GrammarError> {
        let node = self.tree.add_node(kind, label)?;
        self.tree.add_child(tail, node)?;
        Ok(node)
    }

    /// Hang `rule` off `tail` and return the new tail.
    fn attach(&mut self, tail: NodeId, rule: &Rule, depth: usize) -> Result<NodeId, GrammarError> {
        match rule.kind {
            RuleKind::End => {
                if depth > 0 {
                    return Err(GrammarError::NestedEnd);
                }
                self.leaf(tail, NodeKind::End, "end".to_string())
            }
            RuleKind::Required => {
                let (id, name) = self.lookup(rule)?;
                self.leaf(tail, NodeKind::Argument(id), name)
            }
            RuleKind::FreeForm => {
                let (id, name) = self.lookup(rule)?;
                self.leaf(tail, NodeKind::FreeForm(id), name)
            }
            RuleKind::Named => {
                let (id, name) = self.lookup(rule)?;
                let prefix = self.leaf(tail, NodeKind::Prefix(id), name.clone())?;
                self.leaf(prefix, NodeKind::FreeForm(id), name)
            }
            RuleKind::Constant => {
                let literal = rule.name().unwrap_or_default().to_string();
                let arg = self.args.id_of(&literal);
                self.leaf(
                    tail,
                    NodeKind::Constant {
                        literal: literal.clone(),
                        arg,
                    },
                    literal,
                )
            }
            RuleKind::ZeroOrOne | RuleKind::ExactlyOneOf => {
                let start = self.leaf(tail, NodeKind::Hook, "hook".to_string())?;
                let end = self.tree.add_node(NodeKind::Hook, "hook")?;
                self.branches(start, rule, end, depth + 1)?;
                if rule.is_optional() {
                    self.tree.add_child(start, end)?;
                }
                Ok(end)
            }
            RuleKind::ZeroOrMore | RuleKind::OneOrMore | RuleKind::FreeFormGroup => {
                let start = self.leaf(tail, NodeKind::Hook, "hook".to_string())?;
                let repeat = self.tree.add_node(NodeKind::Loop, "loop")?;
                let end = self.tree.add_node(NodeKind::Hook, "hook")?;
                self.branches(start, rule, repeat, depth + 1)?;
                self.tree.add_child(repeat, end)?;
                self.tree.add_loop_child(repeat, start)?;
                if rule.is_optional() {
                    self.tree.add_child(start, end)?;
                }
                Ok(end)
            }
        }
    }

    /// Build each alternative of `group` from `start`, joining every branch
    /// tail into `join`. A rule at position 0 opens a new alternative.
    fn branches(
        &mut self,
        start: NodeId,
        group: &Rule,
        join: NodeId,
        depth: usize,
    ) -> Result<(), GrammarError> {
        let rules = group.rules();
        if rules.is_empty() {
            return Err(GrammarError::EmptyAlternative { span: group.span });
        }
        let mut tail = start;
        for rule in rules {
            if rule.position == 0 && tail != start {
                self.tree.add_child(tail, join)?;
                tail = start;
            }
            tail = self.attach(tail, rule, depth)?;
        }
        self.tree.add_child(tail, join)
    }
}
