// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Walk a parse tree with input tokens.
//!
//! Matching is greedy: at each step the browsable nodes reachable from the
//! current position are tried in order and the first one that accepts the
//! token wins. There is no backtracking.
//!
//! Two entry points share that walk:
//! - [`Matcher::match_tokens`] converts and binds values and enforces
//!   mandatory arguments. It is used when a line is committed.
//! - [`Matcher::suggest`] only moves through the tree and never binds. It is
//!   used for completion while a line is typed.

use crate::argtype::{ArgType, CompletionContext, Prefix};
use crate::argument::{ArgId, ArgumentSet, Bindings};
use crate::error::MatchError;
use crate::input::InputToken;
use crate::rule::{minimum_argument_count, Rule};
use crate::span::Span;
use crate::tree::{Frontier, NodeId, NodeKind, ParseTree};

/// How a token presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape<'a> {
    /// `-name`
    Flag(&'a str),
    /// `name=value`
    Named { name: &'a str, value: &'a str },
    Bare,
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl<'a> Shape<'a> {
    fn of(token: &'a str) -> Self {
        if let Some(name) = token.strip_prefix('-') {
            if is_identifier(name) {
                return Shape::Flag(name);
            }
        }
        if let Some((name, value)) = token.split_once('=') {
            if is_identifier(name) {
                return Shape::Named { name, value };
            }
        }
        Shape::Bare
    }
}

/// One accepted token: where the walk moves and what, if anything, it binds.
#[derive(Debug, Clone, Copy)]
struct Step<'a> {
    at: NodeId,
    bind: Option<(ArgId, &'a str)>,
}

/// Completion output for one position in a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    /// One help entry per reachable node, in order.
    pub help: Vec<String>,
    /// Candidate completions for the partial token, without duplicates.
    pub candidates: Vec<String>,
}

impl Suggestions {
    /// Help entries joined for a single-line toolbar.
    pub fn toolbar(&self, separator: &str) -> String {
        self.help.join(separator)
    }
}

/// Matches token lists against one compiled command.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'t> {
    tree: &'t ParseTree,
    args: &'t ArgumentSet,
    minimum: usize,
}

impl<'t> Matcher<'t> {
    pub fn new(tree: &'t ParseTree, args: &'t ArgumentSet, rules: &[Rule]) -> Self {
        Self {
            tree,
            args,
            minimum: minimum_argument_count(rules),
        }
    }

    fn arg_name(&self, id: ArgId) -> &'t str {
        self.args.get(id).map_or("", |arg| arg.name())
    }

    /// Does `node` accept `token`?
    fn accept<'a>(&self, node: NodeId, token: &'a str) -> Option<Step<'a>> {
        let kind = self.tree.node(node)?.kind();
        let shape = Shape::of(token);
        let bind = |id: ArgId, raw: &'a str| Some((id, raw));
        match kind {
            NodeKind::Argument(id) => match shape {
                Shape::Named { name, value } if name == self.arg_name(*id) => Some(Step {
                    at: node,
                    bind: bind(*id, value),
                }),
                _ => Some(Step {
                    at: node,
                    bind: bind(*id, token),
                }),
            },
            NodeKind::FreeForm(id) => Some(Step {
                at: node,
                bind: bind(*id, token),
            }),
            NodeKind::Constant { literal, arg } if literal == token => Some(Step {
                at: node,
                bind: arg.map(|id| (id, token)),
            }),
            NodeKind::Prefix(id) => match shape {
                Shape::Flag(name) if name == self.arg_name(*id) => Some(Step {
                    at: node,
                    bind: None,
                }),
                Shape::Named { name, value } if name == self.arg_name(*id) => Some(Step {
                    at: self.tree.value_of(node)?,
                    bind: bind(*id, value),
                }),
                _ => None,
            },
            _ => None,
        }
    }

    fn select<'a>(&self, frontier: &Frontier, token: &'a str) -> Option<Step<'a>> {
        frontier
            .nodes
            .iter()
            .find_map(|node| self.accept(*node, token))
    }

    fn reject(&self, frontier: &Frontier, token: &InputToken) -> MatchError {
        if frontier.reaches_end && Shape::of(&token.value) == Shape::Bare {
            MatchError::TooManyArguments {
                token: token.value.clone(),
                span: token.span,
            }
        } else {
            MatchError::UnknownArgument {
                token: token.value.clone(),
                span: token.span,
            }
        }
    }

    /// Labels of everything that could come next, as `a|b`.
    fn expected(&self, frontier: &Frontier) -> String {
        let mut labels: Vec<&str> = Vec::new();
        for node in frontier.nodes.iter().filter_map(|id| self.tree.node(*id)) {
            if !labels.contains(&node.label()) {
                labels.push(node.label());
            }
        }
        labels.join("|")
    }

    /// Match a full line (without the command name) and bind its values.
    ///
    /// # Examples
    ///
    /// ```
    /// use jc_grammar::{build, tokenize, Argument, ArgumentSet, Grammar, Int, Matcher, Str, Value};
    ///
    /// let args = ArgumentSet::new()
    ///     .with(Argument::new("name", Str))?
    ///     .with(Argument::new("nid", Int).default_value(0))?;
    /// let grammar = Grammar::parse("node name [nid]*")?;
    /// let tree = build(&args, grammar.rules())?;
    /// let matcher = Matcher::new(&tree, &args, grammar.rules());
    ///
    /// let tokens = tokenize("n1 -nid 1 -nid 2").unwrap();
    /// let bindings = matcher.match_tokens(&tokens).unwrap();
    /// assert_eq!(bindings.get("name"), Some(&Value::from("n1")));
    /// assert_eq!(bindings.get("nid"), Some(&Value::List(vec![1.into(), 2.into()])));
    /// # Ok::<(), jc_grammar::GrammarError>(())
    /// ```
    pub fn match_tokens(&self, tokens: &[InputToken]) -> Result<Bindings<'t>, MatchError> {
        if tokens.len() < self.minimum {
            return Err(MatchError::TooFewArguments {
                expected: self.minimum,
                found: tokens.len(),
            });
        }

        let mut bindings = self.args.index();
        let mut cursor = self.tree.root();
        for token in tokens {
            let frontier = self.tree.frontier(cursor);
            let Some(step) = self.select(&frontier, &token.value) else {
                return Err(self.reject(&frontier, token));
            };
            if let Some((id, raw)) = step.bind {
                let value = self.convert(id, raw, token.span)?;
                bindings.bind(id, value);
            }
            tracing::trace!(token = %token.value, node = step.at.index(), "matched");
            cursor = step.at;
        }

        let frontier = self.tree.frontier(cursor);
        if !frontier.reaches_end {
            return Err(MatchError::MandatoryArgumentMissing {
                name: self.expected(&frontier),
            });
        }
        if let Some(arg) = bindings.first_unbound() {
            return Err(MatchError::MandatoryArgumentMissing {
                name: arg.name().to_string(),
            });
        }
        Ok(bindings)
    }

    fn convert(&self, id: ArgId, raw: &str, span: Span) -> Result<crate::Value, MatchError> {
        let Some(arg) = self.args.get(id) else {
            return Ok(crate::Value::Str(raw.to_string()));
        };
        arg.ty()
            .convert(raw)
            .map_err(|err| MatchError::TypeConversion {
                name: arg.name().to_string(),
                value: raw.to_string(),
                reason: err.reason,
                span,
            })
    }

    /// Walk as far as the tokens match, without binding anything.
    ///
    /// Stops at the last node that accepted a token, or the root.
    pub fn walk(&self, tokens: &[InputToken]) -> NodeId {
        let mut cursor = self.tree.root();
        for token in tokens {
            let frontier = self.tree.frontier(cursor);
            match self.select(&frontier, &token.value) {
                Some(step) => cursor = step.at,
                None => {
                    tracing::debug!(token = %token.value, "completion walk stopped");
                    break;
                }
            }
        }
        cursor
    }

    /// Help and candidates for the token after `committed`.
    pub fn suggest(
        &self,
        committed: &[InputToken],
        partial: &str,
        ctx: &CompletionContext<'_>,
    ) -> Suggestions {
        let cursor = self.walk(committed);
        let frontier = self.tree.frontier(cursor);
        let mut suggestions = Suggestions::default();
        for id in &frontier.nodes {
            let Some(node) = self.tree.node(*id) else {
                continue;
            };
            let arg = node.kind().arg().and_then(|arg| self.args.get(arg));
            let (help, candidates) = match node.kind() {
                NodeKind::Prefix(_) => {
                    let flag = Prefix::new(format!("-{}", node.label()));
                    (
                        flag.help(partial),
                        flag.complete(ctx, partial).unwrap_or_default(),
                    )
                }
                NodeKind::Constant { literal, .. } => {
                    let candidates = if literal.starts_with(partial) {
                        vec![literal.clone()]
                    } else {
                        Vec::new()
                    };
                    (format!("<{literal}>"), candidates)
                }
                _ => match arg {
                    Some(arg) => (
                        format!("{}: {}", arg.name(), arg.help(partial)),
                        arg.ty().complete(ctx, partial).unwrap_or_default(),
                    ),
                    None => continue,
                },
            };
            suggestions.help.push(help);
            for candidate in candidates {
                if !suggestions.candidates.contains(&candidate) {
                    suggestions.candidates.push(candidate);
                }
            }
        }
        suggestions
    }
}

#[cfg(test)]
#[path = "matcher_tests/mod.rs"]
mod tests;
