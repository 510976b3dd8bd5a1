//! TagPulse API Server
//!
//! Run with: cargo run --bin tagpulse-api
//!
//! # Configuration
//!
//! Environment variables:
//! - `TAGPULSE_CONFIG`: Path to a TOML config file (optional)
//! - `TAGPULSE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `TAGPULSE_PORT`: Port to listen on (default: 8082)
//! - `TAGPULSE_LOOKUP_DELAY_MS`: Simulated lookup latency (default: 800)
//! - `RUST_LOG`: Log level (default: info)

use tagpulse::api::{serve, ApiConfig, AppState};
use tagpulse::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagpulse=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TagPulse API server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        lookup_delay_ms: config.lookup.delay_ms,
    };

    tracing::info!("Simulated lookup latency: {}ms", api_config.lookup_delay_ms);

    let state = AppState::new(api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("TagPulse API server stopped");
    Ok(())
}
