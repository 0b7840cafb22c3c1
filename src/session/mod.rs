//! Content session orchestrator.
//!
//! Owns the current tree, expansion state, and derived row list, and drives
//! the load/toggle state machine against the injected source and store
//! collaborators. State changes are published over a `tokio::sync::watch`
//! channel; the consumer never gets called back directly.
//!
//! # State machine
//!
//! ```text
//! Loading -> Ready { stale: false }    fresh fetch succeeded
//! Loading -> Ready { stale: true }     fetch failed, cached tree adopted
//!                                      (or a previous tree is still held)
//! Loading -> Failed(reason)            fetch failed and cache is empty
//! Ready   -> Ready                     toggle (never re-enters Loading)
//! Ready   -> Loading                   force refresh
//! ```
//!
//! # Concurrency
//!
//! All mutation goes through `&mut self`, so callers serialize loads and
//! toggles by construction. A generation counter is bumped on every load and
//! re-checked after every await point, making results of a superseded load
//! provably inert even if a caller cancels and restarts the `load` future.

use crate::config::RetryPolicy;
use crate::diff::{diff_toggle, RowDiff};
use crate::flatten::{flatten, ExpansionState};
use crate::model::{FetchError, LoadFailure, Node, NodeId, Row, StoreError};
use crate::source::ContentSource;
use crate::store::ContentStore;
use crate::util::relative_time;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Externally observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A load is in flight (including retry backoff waits).
    Loading,
    /// Rows are available. `stale` is set when they came from the offline
    /// cache or survived a failed refresh, so the consumer can show an
    /// offline indicator without blanking the display.
    Ready {
        /// Whether the rows reflect cached rather than freshly fetched data.
        stale: bool,
    },
    /// No rows could be produced from either the network or the cache.
    Failed(LoadFailure),
}

/// Orchestrator holding tree + expansion + rows and the phase channel.
///
/// Generic over its collaborators so tests can script them; production uses
/// [`crate::source::HttpSource`] and [`crate::store::JsonFileStore`].
#[derive(Debug)]
pub struct ContentSession<S, P> {
    source: S,
    store: P,
    retry: RetryPolicy,
    root: Option<Arc<Node>>,
    expansion: ExpansionState,
    rows: Vec<Row>,
    generation: u64,
    phase_tx: watch::Sender<Phase>,
}

impl<S: ContentSource, P: ContentStore> ContentSession<S, P> {
    /// Create a session; no fetch happens until [`load`](Self::load).
    pub fn new(source: S, store: P, retry: RetryPolicy) -> Self {
        let (phase_tx, _) = watch::channel(Phase::Loading);
        Self {
            source,
            store,
            retry,
            root: None,
            expansion: ExpansionState::new(),
            rows: Vec::new(),
            generation: 0,
            phase_tx,
        }
    }

    /// Subscribe to phase changes (presentation boundary).
    ///
    /// Notifications arrive in transition order; a slow consumer observes
    /// the latest phase rather than a backlog.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase_tx.subscribe()
    }

    /// Current phase snapshot.
    pub fn phase(&self) -> Phase {
        self.phase_tx.borrow().clone()
    }

    /// Current visible rows, always the flatten of (tree, expansion).
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether toggling the node could ever reveal rows.
    pub fn is_expandable(&self, id: NodeId) -> bool {
        self.find(id).is_some_and(|node| node.is_expandable())
    }

    /// Load content, retrying transient failures with exponential backoff.
    ///
    /// Without `force_refresh`, a session that already holds a tree
    /// short-circuits to `Ready` without touching the network. Otherwise the
    /// source is fetched; connectivity-class failures retry up to the
    /// policy's cap with doubling delays, anything else falls back to the
    /// persisted tree immediately. A successful fetch replaces the tree,
    /// resets expansion, and refreshes the offline cache best-effort.
    pub async fn load(&mut self, force_refresh: bool) {
        if !force_refresh && self.root.is_some() {
            debug!("load short-circuit: tree already held");
            self.set_phase(Phase::Ready { stale: false });
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        self.set_phase(Phase::Loading);

        let mut attempt = 0u32;
        loop {
            let result = self.source.fetch().await;
            if self.is_superseded(generation) {
                return;
            }

            match result {
                Ok(root) => {
                    if let Err(err) = self.store.save(&root) {
                        // Best-effort cache refresh; never surfaced.
                        warn!(%err, "failed to persist fetched content");
                    }
                    self.adopt(root, false);
                    return;
                }
                Err(err) if err.is_connectivity() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    let delay = self.retry.delay_for(attempt);
                    info!(attempt, ?delay, %err, "transient fetch failure, retrying");
                    tokio::time::sleep(delay).await;
                    if self.is_superseded(generation) {
                        return;
                    }
                }
                Err(err) => {
                    warn!(%err, "fetch failed, falling back to persisted content");
                    self.fall_back(&err);
                    return;
                }
            }
        }
    }

    /// Toggle a node's expansion and return the delta for the display.
    ///
    /// No-op empty diff for unknown ids, non-expandable nodes, and nodes
    /// hidden under a collapsed ancestor (flipping those changes no rows).
    /// The phase stays `Ready`; toggling never re-enters `Loading`.
    pub fn toggle(&mut self, id: NodeId) -> RowDiff {
        let Some(node) = self.find(id) else {
            return RowDiff::default();
        };
        if !node.is_expandable() {
            return RowDiff::default();
        }

        let now_expanded = self.expansion.toggle(id);
        let rows_after = flatten(self.top_level(), &self.expansion);
        let diff = diff_toggle(&self.rows, id, now_expanded, &rows_after).unwrap_or_default();
        self.rows = rows_after;
        debug!(
            node = %id,
            now_expanded,
            deletions = diff.deletions.len(),
            insertions = diff.insertions.len(),
            "toggled node"
        );
        diff
    }

    /// Human-readable time since the last successful persistence.
    pub fn last_update_time(&self) -> String {
        match self.store.last_saved_at() {
            Some(then) => format!("Last updated {}", relative_time(then, Utc::now())),
            None => "Never updated".to_string(),
        }
    }

    // ===== Internals =====

    fn is_superseded(&self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding superseded load");
            true
        } else {
            false
        }
    }

    fn top_level(&self) -> &[Arc<Node>] {
        self.root.as_ref().map(|root| root.children()).unwrap_or(&[])
    }

    fn find(&self, id: NodeId) -> Option<Arc<Node>> {
        self.root.as_ref().and_then(|root| root.find(id))
    }

    /// Replace the tree: expansion resets, rows recompute, phase flips.
    fn adopt(&mut self, root: Arc<Node>, stale: bool) {
        self.expansion.clear();
        self.rows = flatten(root.children(), &self.expansion);
        self.root = Some(root);
        self.set_phase(Phase::Ready { stale });
    }

    fn fall_back(&mut self, cause: &FetchError) {
        if self.root.is_some() {
            // A previous load already produced rows; degrade instead of
            // blanking the display.
            self.set_phase(Phase::Ready { stale: true });
            return;
        }
        match self.store.load() {
            Ok(root) => {
                info!("adopted cached content after fetch failure");
                self.adopt(root, true);
            }
            Err(StoreError::NoDataAvailable) => {
                self.set_phase(Phase::Failed(LoadFailure::from_fetch(cause)));
            }
            Err(err) => {
                warn!(%err, "cached content unusable");
                self.set_phase(Phase::Failed(LoadFailure::InvalidData));
            }
        }
    }

    fn set_phase(&self, phase: Phase) {
        self.phase_tx.send_replace(phase);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
