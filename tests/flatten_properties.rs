//! Property-based invariant tests for the flatten and diff engines.
//!
//! Invariants checked over generated trees and expansion sets:
//!
//! 1. Flatten is idempotent for a fixed (tree, expansion) pair.
//! 2. Non-expandable nodes never introduce child rows.
//! 3. Collapse-then-expand round trips row-for-row.
//! 4. Replaying a toggle diff reproduces the post-toggle rows exactly.
//! 5. Depth never jumps by more than one between adjacent rows.

use contree::diff::{apply, diff_toggle};
use contree::flatten::{flatten, ExpansionState};
use contree::model::{Node, Row};
use contree::parser::{build_tree, RawItem};
use proptest::prelude::*;
use std::sync::Arc;

// ===== Strategies =====

fn arb_kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("page".to_string()),
        Just("section".to_string()),
        Just("text".to_string()),
        Just("image".to_string()),
    ]
}

/// Recursive wire-format tree: up to 4 levels, a handful of children each.
/// Some branches get an explicit empty `items` list to exercise the
/// empty-equals-absent expandability rule.
fn arb_raw_item() -> impl Strategy<Value = RawItem> {
    let leaf = (arb_kind(), "[a-z]{1,8}", prop::option::of(Just(vec![]))).prop_map(
        |(item_type, title, items)| RawItem {
            item_type,
            title,
            items,
            src: None,
        },
    );
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            arb_kind(),
            "[a-z]{1,8}",
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(item_type, title, children)| RawItem {
                item_type,
                title,
                items: Some(children),
                src: None,
            })
    })
}

/// Expansion set derived from a bitmask over pre-order ids, so the set stays
/// meaningful for whatever tree was generated alongside it.
fn expansion_from_mask(root: &Arc<Node>, mask: u64) -> ExpansionState {
    let mut expansion = ExpansionState::new();
    for node in preorder(root) {
        if mask & (1 << (node.id().get() % 64)) != 0 {
            expansion.toggle(node.id());
        }
    }
    expansion
}

fn preorder(root: &Arc<Node>) -> Vec<Arc<Node>> {
    let mut nodes = vec![Arc::clone(root)];
    let mut index = 0;
    while index < nodes.len() {
        let children: Vec<Arc<Node>> = nodes[index].children().to_vec();
        nodes.extend(children);
        index += 1;
    }
    nodes
}

fn depths(rows: &[Row]) -> Vec<usize> {
    rows.iter().map(Row::depth).collect()
}

// ===== Properties =====

proptest! {
    #[test]
    fn flatten_is_idempotent(raw in arb_raw_item(), mask in any::<u64>()) {
        let root = build_tree(&raw);
        let expansion = expansion_from_mask(&root, mask);
        let first = flatten(root.children(), &expansion);
        let second = flatten(root.children(), &expansion);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_expandable_rows_never_have_children_rows(
        raw in arb_raw_item(),
        mask in any::<u64>(),
    ) {
        let root = build_tree(&raw);
        let expansion = expansion_from_mask(&root, mask);
        let rows = flatten(root.children(), &expansion);
        for pair in rows.windows(2) {
            if !pair[0].node().is_expandable() {
                prop_assert!(pair[1].depth() <= pair[0].depth());
            }
        }
    }

    #[test]
    fn adjacent_row_depth_increases_by_at_most_one(
        raw in arb_raw_item(),
        mask in any::<u64>(),
    ) {
        let root = build_tree(&raw);
        let expansion = expansion_from_mask(&root, mask);
        let rows = flatten(root.children(), &expansion);
        for pair in depths(&rows).windows(2) {
            prop_assert!(pair[1] <= pair[0] + 1);
        }
    }

    #[test]
    fn toggle_twice_round_trips(
        raw in arb_raw_item(),
        mask in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let root = build_tree(&raw);
        let mut expansion = expansion_from_mask(&root, mask);
        let nodes = preorder(&root);
        let target = nodes[pick.index(nodes.len())].id();

        let before = flatten(root.children(), &expansion);
        expansion.toggle(target);
        expansion.toggle(target);
        let after = flatten(root.children(), &expansion);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn replaying_a_toggle_diff_reproduces_rows_after(
        raw in arb_raw_item(),
        mask in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let root = build_tree(&raw);
        let mut expansion = expansion_from_mask(&root, mask);
        let before = flatten(root.children(), &expansion);
        prop_assume!(!before.is_empty());

        // Toggle a currently visible row, as the session would.
        let target = before[pick.index(before.len())].node_id();
        let now_expanded = expansion.toggle(target);
        let after = flatten(root.children(), &expansion);

        let diff = diff_toggle(&before, target, now_expanded, &after)
            .expect("toggled row is visible");
        prop_assert_eq!(apply(&before, &diff), after);
    }
}
