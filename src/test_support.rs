//! Shared helpers for unit tests.
//!
//! Trees are built the same way production builds them: by decoding a JSON
//! document through the parser, so test trees carry real ids.

use crate::model::Node;
use crate::parser;
use std::sync::Arc;

/// Decode a JSON content document, panicking on malformed test input.
pub fn tree(json: &str) -> Arc<Node> {
    parser::parse_document(json).expect("test document must parse")
}

/// The canonical scenario document:
/// page P { section S { text T1, text T2 }, text T3 }.
pub fn sample_document() -> &'static str {
    r#"{
        "type": "page",
        "title": "P",
        "items": [
            {
                "type": "section",
                "title": "S",
                "items": [
                    { "type": "text", "title": "T1" },
                    { "type": "text", "title": "T2" }
                ]
            },
            { "type": "text", "title": "T3" }
        ]
    }"#
}

/// Locate a node by title anywhere in the subtree.
pub fn find_by_title(node: &Arc<Node>, title: &str) -> Arc<Node> {
    fn walk(node: &Arc<Node>, title: &str) -> Option<Arc<Node>> {
        if node.title() == title {
            return Some(Arc::clone(node));
        }
        node.children().iter().find_map(|c| walk(c, title))
    }
    walk(node, title).unwrap_or_else(|| panic!("no node titled {title:?}"))
}
