//! Configuration System
//!
//! TOML config files with environment variable overrides. Every field has a
//! default so an empty file (or none at all) yields a working server.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub lookup: LookupSettings,

    #[serde(default)]
    pub fetch: FetchSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// API server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Lookup service settings
#[derive(Debug, Clone, Deserialize)]
pub struct LookupSettings {
    /// Simulated latency before a lookup answers, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    800
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Fetch client settings
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// Seconds a completed result keeps deduplicating repeat requests.
    #[serde(default = "default_dedupe_window_secs")]
    pub dedupe_window_secs: u64,
}

fn default_dedupe_window_secs() -> u64 {
    60
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            dedupe_window_secs: default_dedupe_window_secs(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Defaults, then the file at `TAGPULSE_CONFIG` if set, then individual
    /// env var overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("TAGPULSE_CONFIG") {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(host) = std::env::var("TAGPULSE_HOST") {
            config.api.host = host;
        }
        if let Some(port) = env_parse("TAGPULSE_PORT") {
            config.api.port = port;
        }
        if let Some(delay) = env_parse("TAGPULSE_LOOKUP_DELAY_MS") {
            config.lookup.delay_ms = delay;
        }
        if let Some(window) = env_parse("TAGPULSE_DEDUPE_WINDOW_SECS") {
            config.fetch.dedupe_window_secs = window;
        }

        Ok(config)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8082);
        assert_eq!(config.lookup.delay_ms, 800);
        assert_eq!(config.fetch.dedupe_window_secs, 60);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            port = 9000

            [lookup]
            delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.lookup.delay_ms, 0);
        assert_eq!(config.fetch.dedupe_window_secs, 60);
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.port, 8082);
    }
}
