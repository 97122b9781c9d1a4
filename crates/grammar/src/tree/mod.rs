// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The compiled parse tree.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Hooks join
//! alternative branches, so a hook can have several parents and the graph is
//! a DAG plus loop back-edges. Back-edges are flagged on the edge itself, so
//! traversals decide per call whether to follow them.

mod builder;
mod render;

pub use builder::build;

use crate::argument::ArgId;
use crate::error::GrammarError;

/// Index of a node in its [`ParseTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Unique root.
    Start,
    /// Unique terminator; has no children.
    End,
    /// Join point for alternatives.
    Hook,
    /// Join point whose flagged edge re-enters its group.
    Loop,
    /// Positional argument; takes any token by position.
    Argument(ArgId),
    /// Exact literal, optionally bound to an argument.
    Constant { literal: String, arg: Option<ArgId> },
    /// Takes any token as the argument's value.
    FreeForm(ArgId),
    /// `-name` flag; its only child is the FreeForm node for the value.
    Prefix(ArgId),
}

impl NodeKind {
    /// Browsable nodes consume tokens and show up in completion.
    pub fn is_browsable(&self) -> bool {
        !self.is_structural()
    }

    /// Start, End, Hook and Loop.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            NodeKind::Start | NodeKind::End | NodeKind::Hook | NodeKind::Loop
        )
    }

    pub fn arg(&self) -> Option<ArgId> {
        match self {
            NodeKind::Argument(id) | NodeKind::FreeForm(id) | NodeKind::Prefix(id) => Some(*id),
            NodeKind::Constant { arg, .. } => *arg,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    /// Back-edge from a Loop to the start of its group.
    pub is_loop: bool,
}

#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    label: String,
    parents: Vec<NodeId>,
    children: Vec<Edge>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Argument name, literal or sentinel name.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn children(&self) -> &[Edge] {
        &self.children
    }
}

/// Browsable nodes reachable from a position without consuming a token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    /// In child order, flattened depth-first through structural nodes.
    pub nodes: Vec<NodeId>,
    /// End is reachable, so the input may stop here.
    pub reaches_end: bool,
}

/// An immutable, compiled parse tree.
#[derive(Debug, Clone)]
pub struct ParseTree {
    nodes: Vec<Node>,
    end: Option<NodeId>,
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseTree {
    /// A tree holding only its Start node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Start,
                label: "start".to_string(),
                parents: Vec::new(),
                children: Vec::new(),
            }],
            end: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn end(&self) -> Option<NodeId> {
        self.end
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Add a detached node. Start and End are unique.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        label: impl Into<String>,
    ) -> Result<NodeId, GrammarError> {
        match kind {
            NodeKind::Start => return Err(GrammarError::DuplicateSentinel { kind: "start" }),
            NodeKind::End if self.end.is_some() => {
                return Err(GrammarError::DuplicateSentinel { kind: "end" })
            }
            _ => {}
        }
        let id = NodeId(self.nodes.len());
        if kind == NodeKind::End {
            self.end = Some(id);
        }
        self.nodes.push(Node {
            kind,
            label: label.into(),
            parents: Vec::new(),
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Attach `child` under `parent`.
    ///
    /// Only structural nodes accept more than one parent, and End takes no
    /// children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), GrammarError> {
        self.link(parent, child, false)
    }

    /// Attach a loop back-edge from `parent` to `child`.
    pub fn add_loop_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), GrammarError> {
        self.link(parent, child, true)
    }

    fn link(&mut self, parent: NodeId, child: NodeId, is_loop: bool) -> Result<(), GrammarError> {
        let target = self.nodes.get(child.0).ok_or_else(|| GrammarError::Reparent {
            label: format!("#{}", child.0),
        })?;
        if target.kind.is_browsable() && !target.parents.is_empty() {
            return Err(GrammarError::Reparent {
                label: target.label.clone(),
            });
        }
        let source = self.nodes.get(parent.0).ok_or_else(|| GrammarError::Reparent {
            label: format!("#{}", parent.0),
        })?;
        if source.kind == NodeKind::End {
            return Err(GrammarError::ChildOfEnd);
        }

        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(Edge {
                target: child,
                is_loop,
            });
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parents.push(parent);
        }
        Ok(())
    }

    /// Browsable nodes reachable from `from` before the next token.
    ///
    /// Loop back-edges are followed, so `from` itself is included when a
    /// loop leads straight back to it.
    pub fn frontier(&self, from: NodeId) -> Frontier {
        let mut seen = vec![false; self.nodes.len()];
        let mut frontier = Frontier::default();
        self.collect(from, &mut seen, &mut frontier);
        frontier
    }

    fn collect(&self, from: NodeId, seen: &mut [bool], out: &mut Frontier) {
        let Some(node) = self.nodes.get(from.0) else {
            return;
        };
        for edge in &node.children {
            match seen.get_mut(edge.target.0) {
                Some(flag) if !*flag => *flag = true,
                _ => continue,
            }
            let Some(target) = self.nodes.get(edge.target.0) else {
                continue;
            };
            match target.kind {
                NodeKind::End => out.reaches_end = true,
                NodeKind::Start | NodeKind::Hook | NodeKind::Loop => {
                    self.collect(edge.target, seen, out)
                }
                _ => out.nodes.push(edge.target),
            }
        }
    }

    /// The value node that follows a Prefix node.
    pub fn value_of(&self, prefix: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(prefix.0)?;
        match node.kind {
            NodeKind::Prefix(_) => node.children.first().map(|edge| edge.target),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tree_tests.rs"]
mod tests;
