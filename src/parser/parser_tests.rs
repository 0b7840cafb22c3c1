//! Tests for content document decoding.

use super::*;
use crate::test_support::{find_by_title, sample_document, tree};

#[test]
fn parses_nested_document_with_all_fields() {
    let root = tree(sample_document());
    assert_eq!(root.title(), "P");
    assert_eq!(root.kind(), NodeKind::Page);
    assert_eq!(root.children().len(), 2);

    let s = find_by_title(&root, "S");
    assert_eq!(s.kind(), NodeKind::Section);
    assert_eq!(s.children().len(), 2);
    assert_eq!(s.children()[0].title(), "T1");
}

#[test]
fn rejects_malformed_json() {
    assert!(parse_document("{ not json").is_err());
}

#[test]
fn rejects_schema_mismatch() {
    // `title` is required by the schema.
    assert!(parse_document(r#"{ "type": "page" }"#).is_err());
}

#[test]
fn tolerates_unknown_fields() {
    let root = tree(r#"{ "type": "text", "title": "T", "color": "red" }"#);
    assert_eq!(root.title(), "T");
}

#[test]
fn identical_documents_decode_to_identical_ids() {
    let a = tree(sample_document());
    let b = tree(sample_document());
    assert_eq!(
        find_by_title(&a, "T2").id(),
        find_by_title(&b, "T2").id()
    );
}

#[test]
fn wire_round_trip_preserves_structure() {
    let root = tree(sample_document());
    let doc = to_document(&root);
    let rebuilt = build_tree(&doc);
    assert_eq!(*root, *rebuilt);
}

#[test]
fn wire_projection_keeps_empty_items_distinct_from_absent() {
    let empty = tree(r#"{ "type": "section", "title": "S", "items": [] }"#);
    let leaf = tree(r#"{ "type": "section", "title": "S" }"#);
    assert_eq!(to_document(&empty).items, Some(vec![]));
    assert_eq!(to_document(&leaf).items, None);
}
