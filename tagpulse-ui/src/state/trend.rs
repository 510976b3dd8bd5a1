//! Hashtag Trend Fetch State
//!
//! Signal-based mirror of the data-fetch state machine for the dashboard:
//! loading/error/data/retry, a time-bounded dedupe cache per hashtag key,
//! and a generation guard so a superseded request can never overwrite the
//! state of the key the user switched to.

use leptos::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single dated sentiment observation, as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub sentiment: f64,
}

/// A hashtag's sentiment series: `{hashtag, range, trend}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub hashtag: String,
    pub range: String,
    pub trend: Vec<TrendPoint>,
}

/// Lifecycle of the current hashtag's fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(TrendSeries),
    Failure(String),
}

/// How long a completed result keeps deduplicating repeat requests.
const DEDUPE_WINDOW_MS: f64 = 60_000.0;

struct CacheEntry {
    state: FetchState,
    stored_at: f64,
}

impl CacheEntry {
    fn is_fresh(&self, now: f64) -> bool {
        now - self.stored_at <= DEDUPE_WINDOW_MS
    }
}

/// Normalize a raw hashtag into its lookup key: lowercase, no leading `#`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().trim_start_matches('#').to_lowercase()
}

/// The trend fetch machine handed to the insights page.
#[derive(Clone, Copy)]
pub struct TrendFetch {
    pub state: RwSignal<FetchState>,
    /// True while a retry is in flight with a `Success` series still shown.
    pub revalidating: RwSignal<bool>,
    current: StoredValue<Option<String>>,
    cache: StoredValue<HashMap<String, CacheEntry>>,
    generation: StoredValue<u64>,
}

/// Drive the fetch machine from the route's hashtag parameter.
///
/// No key means `Idle` with no request. A key change moves to `Loading` and
/// issues a fetch, unless the dedupe cache still holds a fresh result for
/// that key.
pub fn use_hashtag_trend(key: Memo<Option<String>>) -> TrendFetch {
    let fetch = TrendFetch {
        state: create_rw_signal(FetchState::Idle),
        revalidating: create_rw_signal(false),
        current: store_value(None),
        cache: store_value(HashMap::new()),
        generation: store_value(0),
    };

    create_effect(move |_| match key.get() {
        None => fetch.clear(),
        Some(raw) => fetch.set_key(normalize_key(&raw)),
    });

    fetch
}

impl TrendFetch {
    /// Re-issue the fetch for the current key, bypassing the cache. A
    /// visible series stays on screen while the request is in flight.
    pub fn retry(&self) {
        if let Some(key) = self.current.get_value() {
            self.start(key, true);
        }
    }

    fn clear(self) {
        self.current.set_value(None);
        self.bump_generation();
        self.state.set(FetchState::Idle);
        self.revalidating.set(false);
    }

    fn set_key(self, key: String) {
        if self.current.with_value(|c| c.as_deref() == Some(key.as_str())) {
            return;
        }
        self.current.set_value(Some(key.clone()));

        let now = now_ms();
        let cached = self.cache.with_value(|cache| {
            cache
                .get(&key)
                .filter(|entry| entry.is_fresh(now))
                .map(|entry| entry.state.clone())
        });

        if let Some(state) = cached {
            // Fresh cache hit: no request, no Loading flicker.
            self.bump_generation();
            self.state.set(state);
            self.revalidating.set(false);
            return;
        }

        self.start(key, false);
    }

    fn start(self, key: String, revalidate: bool) {
        let generation = self.bump_generation();

        let keeps_series =
            revalidate && matches!(self.state.get_untracked(), FetchState::Success(_));
        if keeps_series {
            self.revalidating.set(true);
        } else {
            self.state.set(FetchState::Loading);
            self.revalidating.set(false);
        }

        spawn_local(async move {
            let result = crate::api::fetch_trend(&key).await;

            // The key changed (or a newer retry started) while this request
            // was in flight; drop the response.
            if self.generation.with_value(|g| *g != generation) {
                return;
            }

            let state = match result {
                Ok(series) => FetchState::Success(series),
                Err(message) => FetchState::Failure(message),
            };

            self.cache.update_value(|cache| {
                cache.insert(
                    key,
                    CacheEntry {
                        state: state.clone(),
                        stored_at: now_ms(),
                    },
                );
            });

            self.state.set(state);
            self.revalidating.set(false);
        });
    }

    fn bump_generation(self) -> u64 {
        let mut next = 0;
        self.generation.update_value(|g| {
            *g += 1;
            next = *g;
        });
        next
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("#React"), "react");
        assert_eq!(normalize_key("NEXTJS"), "nextjs");
        assert_eq!(normalize_key(" #uri "), "uri");
    }

    #[test]
    fn test_cache_entry_freshness_window() {
        let entry = CacheEntry {
            state: FetchState::Idle,
            stored_at: 1_000.0,
        };

        assert!(entry.is_fresh(1_000.0));
        assert!(entry.is_fresh(61_000.0));
        assert!(!entry.is_fresh(61_000.1));
    }
}
