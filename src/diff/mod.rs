//! Toggle diff engine (pure).
//!
//! Given the row list before and after a single-node toggle, computes the
//! ordered delete/insert sets an incremental list view needs. The two index
//! sets deliberately live in different coordinate spaces, matching the
//! usual list-update primitives: deletions index into the *before* list,
//! insertions into the *after* list.
//!
//! Correctness property: applying `deletions` to `rows_before` and then
//! placing `insertions` at their stated indices reproduces `rows_after`
//! exactly, and no row outside the toggled node's subtree is ever touched.

use crate::model::{NodeId, Row};

/// Ordered delete/insert description of a single-toggle transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowDiff {
    /// Indices to remove, in `rows_before` coordinates, ascending.
    pub deletions: Vec<usize>,
    /// `(index, row)` pairs to insert, in `rows_after` coordinates, ascending.
    pub insertions: Vec<(usize, Row)>,
}

impl RowDiff {
    /// Whether the toggle changed nothing visible.
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty()
    }
}

/// Compute the delta for a single-node toggle.
///
/// `now_expanded` is the node's expansion state *after* the flip;
/// `rows_after` is the ground-truth flatten of the post-toggle state.
/// Returns `None` when the toggled node is not present in `rows_before`, in
/// which case the caller must fall back to a full reload of its display.
///
/// Exactly one of the two branches applies per call:
/// - newly **expanded**: the node had no visible descendants before, so the
///   inserted rows are precisely the newly visible subtree rows, found
///   contiguously after the anchor in `rows_after`;
/// - newly **collapsed**: every row after the anchor with a strictly greater
///   depth belongs to the collapsing subtree and is deleted.
pub fn diff_toggle(
    rows_before: &[Row],
    toggled: NodeId,
    now_expanded: bool,
    rows_after: &[Row],
) -> Option<RowDiff> {
    let anchor = rows_before.iter().position(|r| r.node_id() == toggled)?;

    if now_expanded {
        // Expanding a node with an empty visible subtree inserts zero rows;
        // still a valid, observable state change.
        let inserted = rows_after.len() - rows_before.len();
        let insertions = rows_after
            .iter()
            .enumerate()
            .skip(anchor + 1)
            .take(inserted)
            .map(|(index, row)| (index, row.clone()))
            .collect();
        Some(RowDiff {
            deletions: Vec::new(),
            insertions,
        })
    } else {
        let depth = rows_before[anchor].depth();
        let deletions = rows_before
            .iter()
            .enumerate()
            .skip(anchor + 1)
            .take_while(|(_, row)| row.depth() > depth)
            .map(|(index, _)| index)
            .collect();
        Some(RowDiff {
            deletions,
            insertions: Vec::new(),
        })
    }
}

/// Replay a diff against the pre-toggle rows.
///
/// Test oracle for the correctness property; also usable by callers that
/// keep a materialized copy of the row list instead of re-flattening.
pub fn apply(rows_before: &[Row], diff: &RowDiff) -> Vec<Row> {
    let mut rows: Vec<Row> = rows_before
        .iter()
        .enumerate()
        .filter(|(index, _)| !diff.deletions.contains(index))
        .map(|(_, row)| row.clone())
        .collect();
    for (index, row) in &diff.insertions {
        rows.insert(*index, row.clone());
    }
    rows
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
