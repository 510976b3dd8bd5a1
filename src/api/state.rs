//! Application State
//!
//! Shared state accessible by all API handlers, wrapped in Arc for sharing
//! across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::dataset::TrendDataset;
use crate::lookup::DatasetLookup;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Lookup service answering trend requests
    pub lookup: Arc<DatasetLookup>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let dataset = Arc::new(TrendDataset::builtin());
        let lookup = Arc::new(DatasetLookup::new(
            dataset,
            Duration::from_millis(config.lookup_delay_ms),
        ));

        Self {
            lookup,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Simulated lookup latency in milliseconds
    pub lookup_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
            lookup_delay_ms: 800,
        }
    }
}

impl ApiConfig {
    /// Config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Config with no simulated latency, for tests
    pub fn instant() -> Self {
        Self {
            lookup_delay_ms: 0,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
