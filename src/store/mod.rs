//! Persistence store collaborator boundary.
//!
//! Best-effort offline cache of the last successfully fetched tree. Save
//! failures are the session's problem to swallow, not the caller's to
//! handle; load failures are a closed [`StoreError`] set the session
//! branches on during fallback.

pub mod json_file;

pub use json_file::JsonFileStore;

use crate::model::{Node, StoreError};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Offline persistence of the content tree.
pub trait ContentStore {
    /// Persist the tree, replacing any previous cache.
    fn save(&self, tree: &Node) -> Result<(), StoreError>;

    /// Load the cached tree. `NoDataAvailable` when nothing was ever saved,
    /// `LoadFailed` when the cache exists but cannot be decoded.
    fn load(&self) -> Result<Arc<Node>, StoreError>;

    /// Timestamp of the last successful save, if any.
    fn last_saved_at(&self) -> Option<DateTime<Utc>>;

    /// Drop the cache and its timestamp.
    fn clear(&self);
}
