//! Content tree node types.
//!
//! A tree is immutable once decoded: nodes are shared via `Arc` between the
//! tree and the flattened row list, so toggling visibility never clones
//! subtrees.

use crate::model::NodeId;
use std::sync::Arc;

/// Discriminates rendering and expandability defaults for a node.
///
/// Unknown document type strings decode as [`NodeKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Top-level page heading.
    Page,
    /// Intermediate grouping heading.
    Section,
    /// Plain text leaf.
    Text,
    /// Image leaf; carries a source URL.
    Image,
}

impl NodeKind {
    /// Map a document `type` string to a kind. Unknown strings fall back to
    /// `Text`, matching upstream documents that add new leaf kinds.
    pub fn from_document_type(raw: &str) -> Self {
        match raw {
            "page" => NodeKind::Page,
            "section" => NodeKind::Section,
            "image" => NodeKind::Image,
            _ => NodeKind::Text,
        }
    }

    /// The document `type` string for this kind.
    pub fn as_document_type(self) -> &'static str {
        match self {
            NodeKind::Page => "page",
            NodeKind::Section => "section",
            NodeKind::Text => "text",
            NodeKind::Image => "image",
        }
    }
}

/// One element of the content tree.
///
/// Invariants (upheld by the parser, the only constructor site):
/// - no two nodes in one tree share an id;
/// - the tree is acyclic and finite (built bottom-up from a serde document,
///   back-references cannot be expressed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    title: String,
    children: Option<Vec<Arc<Node>>>,
    source: Option<String>,
}

impl Node {
    /// Assemble a node from decoded parts. Parser-internal.
    pub(crate) fn from_parts(
        id: NodeId,
        kind: NodeKind,
        title: String,
        children: Option<Vec<Arc<Node>>>,
        source: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            children,
            source,
        }
    }

    /// Tree-unique identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ordered children, empty slice when the node is a leaf.
    pub fn children(&self) -> &[Arc<Node>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the document carried a `items` field at all, even an empty
    /// one. Only relevant to the wire projection.
    pub(crate) fn has_children_field(&self) -> bool {
        self.children.is_some()
    }

    /// Optional source URL; meaningful only for `Image` nodes.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether toggling this node can ever reveal rows.
    ///
    /// Absent and empty `children` are equivalent here: both mean "leaf, not
    /// expandable". Toggling a non-expandable node is a no-op, not an error.
    pub fn is_expandable(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Depth-first search for a node by id within this subtree.
    pub fn find(self: &Arc<Node>, id: NodeId) -> Option<Arc<Node>> {
        if self.id == id {
            return Some(Arc::clone(self));
        }
        self.children().iter().find_map(|child| child.find(id))
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
