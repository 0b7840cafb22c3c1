//! Core identifier newtypes.
//!
//! Node ids are assigned by the parser, never by callers. The constructor is
//! `pub(crate)` so that a `NodeId` can only originate from a decoded tree.

use std::fmt;

/// Unique identifier for a node within one decoded content tree.
///
/// Ids are the node's pre-order position in its document, assigned during
/// decoding. They are unique within a tree and stable across re-fetches of a
/// byte-identical document, but a structurally changed document re-keys its
/// nodes. Expansion state is reset whenever a new tree replaces the old one,
/// so stale ids are harmless: membership checks simply never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Construct from a pre-order counter value. Parser-internal.
    pub(crate) fn from_preorder(index: u64) -> Self {
        Self(index)
    }

    /// Raw numeric value, for logging and debugging.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
