//! Trend Routes
//!
//! - `GET /api/trends` - List available hashtag keys
//! - `GET /api/trends/:hashtag` - Fetch a hashtag's trend series

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::TrendSeries;
use crate::lookup::{LookupError, TrendLookup};

/// Response for the hashtag index
#[derive(Debug, Serialize)]
pub struct HashtagListResponse {
    pub hashtags: Vec<String>,
}

/// GET /api/trends
///
/// List the hashtag keys available for lookup, in presentation order.
pub async fn list_hashtags(State(state): State<Arc<AppState>>) -> Json<HashtagListResponse> {
    Json(HashtagListResponse {
        hashtags: state.lookup.dataset().hashtags().to_vec(),
    })
}

/// GET /api/trends/:hashtag
///
/// Fetch the trend series for a hashtag. The path segment is normalized
/// (lowercased, leading `#` stripped) before lookup. Answers after the
/// configured simulated latency so callers exercise their loading states.
pub async fn get_trend(
    State(state): State<Arc<AppState>>,
    Path(hashtag): Path<String>,
) -> ApiResult<Json<TrendSeries>> {
    let series = state.lookup.lookup(&hashtag).await.map_err(|err| match err {
        LookupError::NotFound { .. } => ApiError::NotFound(err.to_string()),
        LookupError::Transport(message) => ApiError::Internal(message),
    })?;

    tracing::debug!(hashtag = %series.hashtag, points = series.trend.len(), "served trend");

    Ok(Json(series))
}
