//! Error taxonomy for the content engine.
//!
//! Every failure mode is a closed enum variant, never free text, so the
//! consumer can branch on kind. The taxonomy splits along the recovery
//! strategy boundary:
//!
//! - [`FetchError`] connectivity variants are **retryable** (exponential
//!   backoff, bounded attempts); server/data variants trigger immediate
//!   fallback to persisted content.
//! - [`StoreError`] never propagates out of a save: persistence is a
//!   best-effort cache refresh, logged and swallowed by the session.
//! - [`LoadFailure`] is the terminal, consumer-facing reason carried by
//!   `Phase::Failed` when neither the network nor the cache can produce a
//!   tree.

use thiserror::Error;

/// Failure decoding a content document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document was not valid JSON or did not match the content schema.
    #[error("invalid content document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure fetching the content tree from the remote source.
///
/// The first three variants are connectivity-class: the condition is
/// plausibly transient and the session retries with backoff. The rest are
/// non-retryable; retrying a 500 or a malformed body immediately would not
/// help, so the session falls back to persisted content instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    TimedOut,

    /// The connection dropped mid-request.
    #[error("connection lost")]
    ConnectionLost,

    /// No route to the server (offline, DNS failure, refused).
    #[error("not connected")]
    NotConnected,

    /// The server answered with a non-success status.
    #[error("server error (status {status})")]
    ServerError {
        /// HTTP status code, 0 when the status was unavailable.
        status: u16,
    },

    /// The response body could not be decoded as a content tree.
    #[error("invalid data from server: {0}")]
    InvalidData(#[from] ParseError),
}

impl FetchError {
    /// Whether this failure is connectivity-class and worth retrying.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            FetchError::TimedOut | FetchError::ConnectionLost | FetchError::NotConnected
        )
    }
}

/// Failure reading from or writing to the persistence store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Nothing was ever saved.
    #[error("no cached content available")]
    NoDataAvailable,

    /// Cached content exists but could not be decoded.
    #[error("failed to load cached content")]
    LoadFailed,

    /// The tree could not be written to the store.
    #[error("failed to save content")]
    SaveFailed,
}

/// Terminal failure reason surfaced through `Phase::Failed`.
///
/// Only reached when no tree is held in memory and the cache has nothing
/// usable; a session that already shows rows degrades to a stale `Ready`
/// instead of failing (see session docs).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// Connectivity exhausted and no cached content to fall back to.
    #[error("no internet connection available")]
    Offline,

    /// The server rejected or failed the request and nothing was cached.
    #[error("unable to fetch content from server")]
    ServerError,

    /// Fetched or cached data could not be decoded.
    #[error("received invalid content data")]
    InvalidData,
}

impl LoadFailure {
    /// Map an exhausted/non-retryable fetch failure to its terminal reason.
    pub(crate) fn from_fetch(err: &FetchError) -> Self {
        match err {
            e if e.is_connectivity() => LoadFailure::Offline,
            FetchError::ServerError { .. } => LoadFailure::ServerError,
            _ => LoadFailure::InvalidData,
        }
    }
}
