//! # TagPulse
//!
//! Hashtag sentiment insights - a small full-stack Rust application serving
//! sentiment-trend series for hashtags and deriving display metrics from
//! them.
//!
//! ## Modules
//!
//! - [`dataset`]: Fixed in-memory trend dataset
//! - [`lookup`]: Trend lookup service (in-process and HTTP-backed)
//! - [`analytics`]: Pure trend analytics (direction, percent change, extrema)
//! - [`fetch`]: Data-fetch state machine with watch-channel subscriptions
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tagpulse::analytics::analyze;
//! use tagpulse::fetch::{FetchClient, FetchConfig};
//! use tagpulse::lookup::DatasetLookup;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = FetchClient::new(Arc::new(DatasetLookup::builtin()), FetchConfig::default());
//!
//!     let mut rx = client.subscribe(Some("#react"));
//!     while rx.borrow().state.series().is_none() {
//!         rx.changed().await.unwrap();
//!     }
//!
//!     let snapshot = rx.borrow().clone();
//!     let result = analyze(snapshot.state.series().unwrap());
//!     println!("#react is {}", result.badge_label());
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod dataset;
pub mod fetch;
pub mod lookup;

// Re-export top-level types for convenience
pub use analytics::{analyze, AnalyticsResult, Direction};

pub use dataset::{TrendDataset, TrendPoint, TrendSeries};

pub use lookup::{normalize_key, DatasetLookup, HttpLookup, LookupError, TrendLookup};

pub use fetch::{FetchClient, FetchConfig, FetchSnapshot, FetchState};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError};
