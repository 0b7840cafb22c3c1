//! Flattening engine (pure).
//!
//! Converts a nested tree plus an expansion set into the ordered row list the
//! presentation layer displays. The walk is a depth-first pre-order
//! traversal restricted to visible nodes: a node appears as a row iff every
//! ancestor on its path (excluding the top-level sequence itself) is
//! expanded.
//!
//! The function is total and deterministic for any acyclic finite tree:
//! absent/empty children, unknown expansion ids, and empty root sequences
//! all produce valid (possibly empty) output. Complexity is O(visible rows).

use crate::model::{Node, NodeId, Row};
use std::collections::HashSet;
use std::sync::Arc;

/// Set of node ids whose children are currently visible.
///
/// Starts empty on every fresh load; the only mutation is toggling a single
/// id's membership. Replacing the tree clears it wholesale rather than
/// purging old ids one by one; membership is only ever checked against the
/// new tree's ids, so leftovers would be inert anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<NodeId>,
}

impl ExpansionState {
    /// Empty expansion state: only top-level rows visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the node's children are currently visible.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.open.contains(&id)
    }

    /// Flip the node's membership; returns the new membership (true when the
    /// node is now expanded).
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    /// Drop all memberships (used when a new tree replaces the old one).
    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// Number of expanded nodes.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no node is expanded.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

/// Flatten a top-level node sequence into the visible row list.
///
/// Children of an expanded node appear contiguously after their parent,
/// before any sibling of the parent, at depth + 1. Non-expandable nodes
/// never recurse regardless of expansion membership.
pub fn flatten(roots: &[Arc<Node>], expansion: &ExpansionState) -> Vec<Row> {
    let mut rows = Vec::new();
    for node in roots {
        push_visible(node, 0, expansion, &mut rows);
    }
    rows
}

fn push_visible(
    node: &Arc<Node>,
    depth: usize,
    expansion: &ExpansionState,
    rows: &mut Vec<Row>,
) {
    rows.push(Row::new(Arc::clone(node), depth));
    if node.is_expandable() && expansion.is_expanded(node.id()) {
        for child in node.children() {
            push_visible(child, depth + 1, expansion, rows);
        }
    }
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod tests;
