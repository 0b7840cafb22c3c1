//! Content source collaborator boundary.
//!
//! The session only ever sees this trait; production wires in
//! [`http::HttpSource`], tests wire in scripted fakes.

pub mod http;

pub use http::HttpSource;

use crate::model::{FetchError, Node};
use std::sync::Arc;

/// Remote origin of the content tree.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Fetch and decode the full content tree.
    ///
    /// Failure classification drives the session's retry policy: see
    /// [`FetchError::is_connectivity`].
    async fn fetch(&self) -> Result<Arc<Node>, FetchError>;
}
