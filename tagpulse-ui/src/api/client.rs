//! HTTP API Client
//!
//! Functions for communicating with the TagPulse REST API.

use gloo_net::http::Request;

use crate::state::trend::TrendSeries;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082";

/// Fallback shown when a failure carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch hashtag trend data";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("tagpulse_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Fetch the trend series for a normalized hashtag key.
///
/// Non-2xx responses surface the endpoint's `{error}` message, falling back
/// to [`GENERIC_FETCH_ERROR`] when the body can't be read.
pub async fn fetch_trend(key: &str) -> Result<TrendSeries, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/trends/{}", api_base, key))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: GENERIC_FETCH_ERROR.to_string(),
        });
        let message = if error.error.is_empty() {
            GENERIC_FETCH_ERROR.to_string()
        } else {
            error.error
        };
        return Err(message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
