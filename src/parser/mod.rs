//! Content document decoding.
//!
//! The wire format is a recursively nested JSON document:
//!
//! ```json
//! { "type": "page", "title": "...", "items": [ ... ], "src": "..." }
//! ```
//!
//! `items` and `src` are optional; absent `items` marks a leaf. The document
//! carries no per-node identifiers, so decoding assigns each node its
//! pre-order position as a [`NodeId`] in a single pass. The same projection
//! is used in reverse by the persistence store, which caches the wire format
//! rather than decoded trees.

use crate::model::{Node, NodeId, NodeKind, ParseError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Wire-format node, exactly the document schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawItem {
    /// Document type string ("page", "section", "text", "image", ...).
    #[serde(rename = "type")]
    pub item_type: String,

    /// Display title.
    pub title: String,

    /// Nested items; `None` marks a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawItem>>,

    /// Source URL for image items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

/// Decode a JSON content document into an id-assigned tree.
pub fn parse_document(json: &str) -> Result<Arc<Node>, ParseError> {
    let raw: RawItem = serde_json::from_str(json)?;
    Ok(build_tree(&raw))
}

/// Build an id-assigned tree from an already-decoded wire document.
pub fn build_tree(raw: &RawItem) -> Arc<Node> {
    let mut next_id = 0u64;
    build_node(raw, &mut next_id)
}

fn build_node(raw: &RawItem, next_id: &mut u64) -> Arc<Node> {
    let id = NodeId::from_preorder(*next_id);
    *next_id += 1;

    let children = raw
        .items
        .as_ref()
        .map(|items| items.iter().map(|item| build_node(item, next_id)).collect());

    Arc::new(Node::from_parts(
        id,
        NodeKind::from_document_type(&raw.item_type),
        raw.title.clone(),
        children,
        raw.src.clone(),
    ))
}

/// Project a tree back to the wire format, dropping ids.
pub fn to_document(node: &Node) -> RawItem {
    RawItem {
        item_type: node.kind().as_document_type().to_string(),
        title: node.title().to_string(),
        items: node
            .has_children_field()
            .then(|| node.children().iter().map(|c| to_document(c)).collect()),
        src: node.source().map(str::to_string),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
