// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::argtype::{Int, Str};
use crate::argument::{Argument, ArgumentSet};
use crate::rule::{Rule, RuleKind};
use crate::span::Span;
use crate::syntax::Grammar;

fn str_args(names: &[&str]) -> ArgumentSet {
    let mut set = ArgumentSet::new();
    for name in names {
        set.push(Argument::new(*name, Str).default_value("")).unwrap();
    }
    set
}

fn compile(source: &str, args: &ArgumentSet) -> ParseTree {
    let grammar = Grammar::parse(source).unwrap();
    build(args, grammar.rules()).unwrap()
}

fn labels(tree: &ParseTree, frontier: &Frontier) -> Vec<String> {
    frontier
        .nodes
        .iter()
        .map(|id| {
            let node = tree.node(*id).unwrap();
            match node.kind() {
                NodeKind::Prefix(_) => format!("-{}", node.label()),
                _ => node.label().to_string(),
            }
        })
        .collect()
}

/// First node with this label whose kind passes `kind`.
fn find(tree: &ParseTree, label: &str, kind: fn(&NodeKind) -> bool) -> NodeId {
    tree.iter()
        .find(|(_, node)| node.label() == label && kind(node.kind()))
        .map(|(id, _)| id)
        .unwrap()
}

fn is_value(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::FreeForm(_))
}

fn is_argument(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::Argument(_))
}

// =============================================================================
// Shape
// =============================================================================

#[test]
fn renders_optional_group() {
    let tree = compile("tenant tname [tid]?", &str_args(&["tname", "tid"]));
    similar_asserts::assert_eq!(
        tree.to_string(),
        "start\n  tname\n    hook\n      -tid\n        tid*\n          hook\n            end\n      hook ...\n"
    );
}

#[test]
fn renders_loop_without_back_edge() {
    let tree = compile("cmd a [b]*", &str_args(&["a", "b"]));
    similar_asserts::assert_eq!(
        tree.to_string(),
        "start\n  a\n    hook\n      -b\n        b*\n          loop\n            hook\n              end\n      hook ...\n"
    );
}

#[test]
fn loop_has_one_flagged_edge_back_to_group_start() {
    let tree = compile("cmd a [b]+", &str_args(&["a", "b"]));
    let (loop_id, node) = tree
        .iter()
        .find(|(_, node)| *node.kind() == NodeKind::Loop)
        .unwrap();
    let back: Vec<_> = node.children().iter().filter(|e| e.is_loop).collect();
    assert_eq!(back.len(), 1);
    let start = tree.node(back[0].target).unwrap();
    assert_eq!(*start.kind(), NodeKind::Hook);
    assert!(start.parents().contains(&loop_id));
}

#[test]
fn join_hook_has_a_parent_per_branch() {
    let tree = compile("node name [nid|nsig]!", &str_args(&["name", "nid", "nsig"]));
    let join = tree
        .iter()
        .find(|(_, node)| {
            node.children()
                .iter()
                .any(|edge| tree.node(edge.target).map(|n| n.kind()) == Some(&NodeKind::End))
        })
        .map(|(_, node)| node)
        .unwrap();
    assert_eq!(*join.kind(), NodeKind::Hook);
    assert_eq!(join.parents().len(), 2);
}

#[test]
fn named_member_is_prefix_then_value() {
    let tree = compile("tenant tname [tid]?", &str_args(&["tname", "tid"]));
    let prefix = find(&tree, "tid", |k| matches!(k, NodeKind::Prefix(_)));
    let value = tree.value_of(prefix).unwrap();
    assert!(is_value(tree.node(value).unwrap().kind()));
    assert_eq!(tree.value_of(tree.root()), None);
}

#[test]
fn constants_bind_only_when_declared() {
    let declared = compile("setsyntax f1 <F2>", &str_args(&["f1", "F2"]));
    let node = find(&declared, "F2", |k| matches!(k, NodeKind::Constant { .. }));
    assert!(declared.node(node).unwrap().kind().arg().is_some());

    let bare = compile("setsyntax f1 <F2>", &str_args(&["f1"]));
    let node = find(&bare, "F2", |k| matches!(k, NodeKind::Constant { .. }));
    assert_eq!(bare.node(node).unwrap().kind().arg(), None);
}

// =============================================================================
// Frontier
// =============================================================================

#[test]
fn frontier_flattens_hooks() {
    let tree = compile("node name [nid|nsig]?", &str_args(&["name", "nid", "nsig"]));
    let name = find(&tree, "name", is_argument);
    let frontier = tree.frontier(name);
    assert_eq!(labels(&tree, &frontier), ["-nid", "-nsig"]);
    assert!(frontier.reaches_end);
}

#[test]
fn frontier_crosses_consecutive_optional_groups() {
    let tree = compile(
        "setsyntax f1 [f2]? [f3]+ [f4]* [f5]?",
        &str_args(&["f1", "f2", "f3", "f4", "f5"]),
    );
    let f1 = find(&tree, "f1", is_argument);
    let first = tree.frontier(f1);
    assert_eq!(labels(&tree, &first), ["-f2", "-f3"]);
    assert!(!first.reaches_end);

    let f3 = find(&tree, "f3", is_value);
    let after = tree.frontier(f3);
    assert_eq!(labels(&tree, &after), ["-f4", "-f5", "-f3"]);
    assert!(after.reaches_end);
}

#[test]
fn loop_edges_reoffer_the_group() {
    let tree = compile("cmd a [b]*", &str_args(&["a", "b"]));
    let b = find(&tree, "b", is_value);
    let frontier = tree.frontier(b);
    assert_eq!(labels(&tree, &frontier), ["-b"]);
    assert!(frontier.reaches_end);
}

#[test]
fn nested_optional_frontier() {
    let tree = compile(
        "setsyntax f1 [f2 | f3 [f4|f5]?]?",
        &str_args(&["f1", "f2", "f3", "f4", "f5"]),
    );
    let f3 = find(&tree, "f3", is_value);
    let frontier = tree.frontier(f3);
    assert_eq!(labels(&tree, &frontier), ["-f4", "-f5"]);
    assert!(frontier.reaches_end);
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn browsable_nodes_cannot_be_reparented() {
    let args = str_args(&["a"]);
    let mut tree = ParseTree::new();
    let id = args.id_of("a").unwrap();
    let leaf = tree.add_node(NodeKind::Argument(id), "a").unwrap();
    let hook = tree.add_node(NodeKind::Hook, "hook").unwrap();
    tree.add_child(tree.root(), leaf).unwrap();
    assert_eq!(
        tree.add_child(hook, leaf),
        Err(GrammarError::Reparent { label: "a".into() })
    );
}

#[test]
fn hooks_accept_many_parents() {
    let mut tree = ParseTree::new();
    let a = tree.add_node(NodeKind::Hook, "hook").unwrap();
    let join = tree.add_node(NodeKind::Hook, "hook").unwrap();
    tree.add_child(tree.root(), join).unwrap();
    tree.add_child(a, join).unwrap();
    assert_eq!(tree.node(join).unwrap().parents().len(), 2);
}

#[test]
fn end_takes_no_children() {
    let mut tree = ParseTree::new();
    let end = tree.add_node(NodeKind::End, "end").unwrap();
    let hook = tree.add_node(NodeKind::Hook, "hook").unwrap();
    assert_eq!(tree.add_child(end, hook), Err(GrammarError::ChildOfEnd));
}

#[test]
fn sentinels_are_unique() {
    let mut tree = ParseTree::new();
    assert_eq!(
        tree.add_node(NodeKind::Start, "start"),
        Err(GrammarError::DuplicateSentinel { kind: "start" })
    );
    tree.add_node(NodeKind::End, "end").unwrap();
    assert_eq!(
        tree.add_node(NodeKind::End, "end"),
        Err(GrammarError::DuplicateSentinel { kind: "end" })
    );
}

#[test]
fn undeclared_argument_is_reported_with_span() {
    let source = "tenant tname [tid]?";
    let grammar = Grammar::parse(source).unwrap();
    let err = build(&str_args(&["tname"]), grammar.rules()).unwrap_err();
    let GrammarError::UndeclaredArgument { name, span } = err else {
        panic!("expected UndeclaredArgument, got {err:?}");
    };
    assert_eq!(name, "tid");
    assert_eq!(span.slice(source), "tid");
}

#[test]
fn end_inside_group_is_rejected() {
    let rules = vec![
        Rule::group(
            RuleKind::ZeroOrOne,
            0,
            vec![
                Rule::leaf(RuleKind::Named, 0, "a", Span::default()),
                Rule::end(1, Span::default()),
            ],
            Span::default(),
        ),
        Rule::end(1, Span::default()),
    ];
    assert_eq!(build(&str_args(&["a"]), &rules).unwrap_err(), GrammarError::NestedEnd);
}

#[test]
fn rules_after_end_are_rejected() {
    let rules = vec![
        Rule::end(0, Span::default()),
        Rule::leaf(RuleKind::Required, 1, "a", Span::default()),
    ];
    assert_eq!(
        build(&str_args(&["a"]), &rules).unwrap_err(),
        GrammarError::RuleAfterEnd { rule: "a".into() }
    );
}

#[test]
fn empty_group_rules_are_rejected() {
    let rules = vec![
        Rule::group(RuleKind::ZeroOrMore, 0, vec![], Span::new(4, 7)),
        Rule::end(1, Span::default()),
    ];
    assert_eq!(
        build(&ArgumentSet::new(), &rules).unwrap_err(),
        GrammarError::EmptyAlternative {
            span: Span::new(4, 7)
        }
    );
}

#[test]
fn typed_arguments_keep_their_ids() {
    let args = ArgumentSet::new()
        .with(Argument::new("f1", Int))
        .and_then(|set| set.with(Argument::new("f2", Str).default_value("x")))
        .unwrap();
    let tree = compile("setsyntax f1 [f2]?", &args);
    let f1 = find(&tree, "f1", is_argument);
    assert_eq!(tree.node(f1).unwrap().kind().arg(), args.id_of("f1"));
}
