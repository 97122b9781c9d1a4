// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Indented text rendering of a parse tree.

use super::{NodeId, NodeKind, ParseTree};
use std::fmt;

impl ParseTree {
    fn render_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        depth: usize,
        printed: &mut [bool],
    ) -> fmt::Result {
        let Some(node) = self.node(id) else {
            return Ok(());
        };
        let name = match node.kind() {
            NodeKind::Prefix(_) => format!("-{}", node.label()),
            NodeKind::Constant { .. } => format!("<{}>", node.label()),
            NodeKind::FreeForm(_) => format!("{}*", node.label()),
            _ => node.label().to_string(),
        };
        let indent = "  ".repeat(depth);

        let first_visit = match printed.get_mut(id.index()) {
            Some(flag) => !std::mem::replace(flag, true),
            None => false,
        };
        if !first_visit {
            return writeln!(f, "{indent}{name} ...");
        }

        writeln!(f, "{indent}{name}")?;
        for edge in node.children().iter().filter(|edge| !edge.is_loop) {
            self.render_node(f, edge.target, depth + 1, printed)?;
        }
        Ok(())
    }
}

/// One node per line, children indented beneath their parent. Loop
/// back-edges are not followed; a node reached again is shown once more
/// with a trailing `...` instead of its subtree.
///
/// Prefix nodes print as `-name`, constants as `<LIT>` and free-form value
/// nodes as `name*`.
impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printed = vec![false; self.len()];
        self.render_node(f, self.root(), 0, &mut printed)
    }
}
