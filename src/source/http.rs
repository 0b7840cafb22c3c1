//! HTTP content source backed by reqwest.

use crate::model::{FetchError, Node, ParseError};
use crate::parser;
use crate::source::ContentSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Fetches the content document from a configured URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Build a source with the given endpoint and request timeout.
    ///
    /// Falls back to a default client when the builder is rejected by the
    /// platform TLS stack; the only tuning applied here is the timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: url.into(),
        }
    }

    fn classify(err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::TimedOut
        } else if err.is_connect() {
            FetchError::NotConnected
        } else if let Some(status) = err.status() {
            FetchError::ServerError {
                status: status.as_u16(),
            }
        } else {
            // Request started but did not complete cleanly.
            FetchError::ConnectionLost
        }
    }
}

impl ContentSource for HttpSource {
    async fn fetch(&self) -> Result<Arc<Node>, FetchError> {
        debug!(url = %self.url, "fetching content document");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::classify)?;
        let tree = parser::parse_document(&body).map_err(|err: ParseError| {
            debug!(%err, "content document failed to decode");
            FetchError::InvalidData(err)
        })?;
        Ok(tree)
    }
}
