//! Flattened row type.

use crate::model::{Node, NodeId};
use std::sync::Arc;

/// One visible list entry: a node paired with its indentation depth.
///
/// Rows are cheap to clone (the node is shared, not copied), so the diff
/// engine can hand out row values without touching the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    node: Arc<Node>,
    depth: usize,
}

impl Row {
    /// Pair a node with its depth. Flatten-engine internal.
    pub(crate) fn new(node: Arc<Node>, depth: usize) -> Self {
        Self { node, depth }
    }

    /// The node this row displays.
    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }

    /// Shorthand for the node's id.
    pub fn node_id(&self) -> NodeId {
        self.node.id()
    }

    /// Indentation depth; top-level rows are at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
