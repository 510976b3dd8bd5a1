//! Trend Lookup Service
//!
//! Resolves a hashtag key to its trend series. The [`TrendLookup`] trait is
//! the seam between the fetch client and whatever actually answers: the
//! in-process dataset (with simulated network latency) or a remote TagPulse
//! API over HTTP.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::dataset::{TrendDataset, TrendSeries};

/// Artificial latency before the dataset lookup answers. Loading states are
/// only observable in callers because of this delay.
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(800);

/// Fallback shown when a failure carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch hashtag trend data";

/// Lookup failures, surfaced to callers as the `Failure` message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The requested hashtag key has no entry in the dataset.
    #[error("Hashtag #{key} not found")]
    NotFound { key: String },

    /// Failure reaching or reading the lookup endpoint.
    #[error("{0}")]
    Transport(String),
}

/// Normalize a raw hashtag into its lookup key: lowercase, no leading `#`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().trim_start_matches('#').to_lowercase()
}

/// Anything that can resolve a normalized hashtag key to a series.
#[async_trait]
pub trait TrendLookup: Send + Sync {
    async fn lookup(&self, key: &str) -> Result<TrendSeries, LookupError>;
}

/// Lookup backed by the in-memory dataset.
///
/// Sleeps for a configurable delay before answering; pass `Duration::ZERO`
/// in tests.
pub struct DatasetLookup {
    dataset: Arc<TrendDataset>,
    delay: Duration,
}

impl DatasetLookup {
    pub fn new(dataset: Arc<TrendDataset>, delay: Duration) -> Self {
        Self { dataset, delay }
    }

    /// Dataset lookup with the default simulated latency.
    pub fn builtin() -> Self {
        Self::new(Arc::new(TrendDataset::builtin()), DEFAULT_LOOKUP_DELAY)
    }

    pub fn dataset(&self) -> &TrendDataset {
        &self.dataset
    }
}

#[async_trait]
impl TrendLookup for DatasetLookup {
    async fn lookup(&self, key: &str) -> Result<TrendSeries, LookupError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let key = normalize_key(key);
        self.dataset
            .get(&key)
            .cloned()
            .ok_or(LookupError::NotFound { key })
    }
}

/// Lookup against a remote TagPulse API.
pub struct HttpLookup {
    client: reqwest::Client,
    base_url: String,
}

/// Error body returned by the API on failure.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TrendLookup for HttpLookup {
    async fn lookup(&self, key: &str) -> Result<TrendSeries, LookupError> {
        let key = normalize_key(key);
        let url = format!("{}/api/trends/{}", self.base_url, key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| GENERIC_FETCH_ERROR.to_string());
            return Err(LookupError::Transport(message));
        }

        response
            .json::<TrendSeries>()
            .await
            .map_err(|e| LookupError::Transport(format!("Parse error: {}", e)))
    }
}
