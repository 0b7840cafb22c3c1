//! JSON-file-backed content store.
//!
//! The cache file holds the wire-format document plus the save timestamp:
//!
//! ```json
//! { "saved_at": "2026-08-29T12:00:00Z", "content": { "type": "page", ... } }
//! ```
//!
//! Loading re-decodes through the parser, so cached trees get fresh
//! pre-order ids exactly like freshly fetched ones.

use crate::model::{Node, StoreError};
use crate::parser::{self, RawItem};
use crate::store::ContentStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct CachedDocument {
    saved_at: DateTime<Utc>,
    content: RawItem,
}

/// Content store persisting to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the given file path. Parent directories are created
    /// lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_cache(&self) -> Result<CachedDocument, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NoDataAvailable)
            }
            Err(err) => {
                debug!(path = %self.path.display(), %err, "cache read failed");
                return Err(StoreError::LoadFailed);
            }
        };
        serde_json::from_slice(&bytes).map_err(|err| {
            debug!(path = %self.path.display(), %err, "cache decode failed");
            StoreError::LoadFailed
        })
    }
}

impl ContentStore for JsonFileStore {
    fn save(&self, tree: &Node) -> Result<(), StoreError> {
        let cached = CachedDocument {
            saved_at: Utc::now(),
            content: parser::to_document(tree),
        };
        let bytes = serde_json::to_vec(&cached).map_err(|_| StoreError::SaveFailed)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|_| StoreError::SaveFailed)?;
        }
        fs::write(&self.path, bytes).map_err(|_| StoreError::SaveFailed)
    }

    fn load(&self) -> Result<Arc<Node>, StoreError> {
        let cached = self.read_cache()?;
        Ok(parser::build_tree(&cached.content))
    }

    fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.read_cache().ok().map(|cached| cached.saved_at)
    }

    fn clear(&self) {
        // Missing file and removed file are the same end state.
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
#[path = "json_file_tests.rs"]
mod tests;
