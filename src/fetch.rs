//! Data-Fetch Client
//!
//! An explicit state machine around a [`TrendLookup`], decoupled from any
//! rendering layer. Callers subscribe to a `tokio::sync::watch` channel and
//! receive a [`FetchSnapshot`] every time the state changes.
//!
//! Behavior:
//! - no key: `Idle`, no lookup issued
//! - key change: `Loading`, lookup issued
//! - repeated subscribe for the same key inside the dedupe window reuses the
//!   in-flight or last-completed result
//! - `retry()` always re-issues the lookup, bypassing the cache
//! - a completion for a superseded request is dropped (stale-response guard)

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::dataset::TrendSeries;
use crate::lookup::{normalize_key, TrendLookup, GENERIC_FETCH_ERROR};

/// Lifecycle of a single hashtag's fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(TrendSeries),
    Failure(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn series(&self) -> Option<&TrendSeries> {
        match self {
            FetchState::Success(series) => Some(series),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Failure(_))
    }
}

/// What subscribers observe: the current state plus a revalidation flag that
/// may be true while a `Success` series is still on display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchSnapshot {
    pub state: FetchState,
    pub revalidating: bool,
}

/// Fetch client tuning.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// How long a completed result keeps deduplicating repeat requests.
    pub dedupe_window: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            dedupe_window: Duration::from_secs(60),
        }
    }
}

struct CacheEntry {
    state: FetchState,
    stored_at: Instant,
}

struct Inner {
    /// Normalized key currently subscribed, if any.
    key: Option<String>,
    /// Bumped on every key change and retry; completions from older
    /// generations are ignored.
    generation: u64,
    cache: HashMap<String, CacheEntry>,
}

/// The data-fetch state machine.
pub struct FetchClient<L> {
    lookup: Arc<L>,
    config: FetchConfig,
    inner: Arc<Mutex<Inner>>,
    tx: watch::Sender<FetchSnapshot>,
}

impl<L: TrendLookup + 'static> FetchClient<L> {
    pub fn new(lookup: Arc<L>, config: FetchConfig) -> Self {
        let (tx, _rx) = watch::channel(FetchSnapshot::default());
        Self {
            lookup,
            config,
            inner: Arc::new(Mutex::new(Inner {
                key: None,
                generation: 0,
                cache: HashMap::new(),
            })),
            tx,
        }
    }

    /// Point the machine at a hashtag key (or none) and get the state channel.
    ///
    /// The returned receiver immediately holds the current snapshot; await
    /// `changed()` for updates.
    pub fn subscribe(&self, key: Option<&str>) -> watch::Receiver<FetchSnapshot> {
        match key {
            None => self.clear(),
            Some(raw) => self.set_key(normalize_key(raw)),
        }
        self.tx.subscribe()
    }

    /// Re-issue the lookup for the current key, bypassing the dedupe cache.
    ///
    /// While a `Success` series is on display it stays visible and the
    /// snapshot is flagged as revalidating; any other state returns to
    /// `Loading`. Whatever outcome follows overwrites the prior state.
    pub fn retry(&self) {
        let generation;
        let key;
        {
            let mut inner = self.inner.lock().unwrap();
            let Some(current) = inner.key.clone() else {
                return;
            };
            inner.generation += 1;
            generation = inner.generation;
            key = current;
        }

        tracing::debug!(key = %key, "retrying lookup");

        let has_series = self.tx.borrow().state.series().is_some();
        if has_series {
            self.tx.send_modify(|snapshot| snapshot.revalidating = true);
        } else {
            self.publish(FetchState::Loading);
        }

        self.spawn_lookup(key, generation);
    }

    /// Current snapshot without subscribing.
    pub fn snapshot(&self) -> FetchSnapshot {
        self.tx.borrow().clone()
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.key = None;
        inner.generation += 1;
        drop(inner);

        self.publish(FetchState::Idle);
    }

    fn set_key(&self, key: String) {
        let generation;
        {
            let mut inner = self.inner.lock().unwrap();

            if inner.key.as_deref() == Some(&key) {
                // Same key again: reuse the in-flight request, or the settled
                // result while its cache entry is still fresh.
                let settled = self.tx.borrow().state.is_settled();
                let fresh = inner
                    .cache
                    .get(&key)
                    .map(|entry| entry.stored_at.elapsed() <= self.config.dedupe_window)
                    .unwrap_or(false);
                if !settled || fresh {
                    return;
                }
            }

            inner.key = Some(key.clone());
            inner.generation += 1;
            generation = inner.generation;

            if let Some(entry) = inner.cache.get(&key) {
                if entry.stored_at.elapsed() <= self.config.dedupe_window {
                    tracing::debug!(key = %key, "serving cached state");
                    let state = entry.state.clone();
                    drop(inner);
                    self.publish(state);
                    return;
                }
            }
        }

        self.publish(FetchState::Loading);
        self.spawn_lookup(key, generation);
    }

    fn spawn_lookup(&self, key: String, generation: u64) {
        let lookup = Arc::clone(&self.lookup);
        let inner = Arc::clone(&self.inner);
        let tx = self.tx.clone();
        let log_key = key.clone();

        tokio::spawn(async move {
            let result = lookup.lookup(&key).await;

            let state = match result {
                Ok(series) => FetchState::Success(series),
                Err(err) => {
                    let message = err.to_string();
                    FetchState::Failure(if message.is_empty() {
                        GENERIC_FETCH_ERROR.to_string()
                    } else {
                        message
                    })
                }
            };

            let mut inner = inner.lock().unwrap();
            if inner.generation != generation {
                tracing::debug!(key = %log_key, "dropping stale lookup response");
                return;
            }

            inner.cache.insert(
                key,
                CacheEntry {
                    state: state.clone(),
                    stored_at: Instant::now(),
                },
            );
            drop(inner);

            tx.send_replace(FetchSnapshot {
                state,
                revalidating: false,
            });
        });
    }

    fn publish(&self, state: FetchState) {
        self.tx.send_replace(FetchSnapshot {
            state,
            revalidating: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TrendDataset;
    use crate::lookup::{LookupError, TrendLookup};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Dataset lookup whose responses are held until released, with a call
    /// counter. Lets tests resolve requests out of order.
    struct GatedLookup {
        dataset: TrendDataset,
        gates: Mutex<HashMap<String, Arc<Notify>>>,
        calls: AtomicUsize,
    }

    impl GatedLookup {
        fn new() -> Self {
            Self {
                dataset: TrendDataset::builtin(),
                gates: Mutex::new(HashMap::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn gate(&self, key: &str) -> Arc<Notify> {
            let mut gates = self.gates.lock().unwrap();
            Arc::clone(gates.entry(key.to_string()).or_default())
        }

        fn release(&self, key: &str) {
            self.gate(key).notify_one();
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TrendLookup for GatedLookup {
        async fn lookup(&self, key: &str) -> Result<TrendSeries, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate(key).notified().await;

            self.dataset
                .get(key)
                .cloned()
                .ok_or_else(|| LookupError::NotFound {
                    key: key.to_string(),
                })
        }
    }

    fn client(lookup: Arc<GatedLookup>) -> FetchClient<GatedLookup> {
        FetchClient::new(lookup, FetchConfig::default())
    }

    async fn wait_until(
        rx: &mut watch::Receiver<FetchSnapshot>,
        pred: impl Fn(&FetchSnapshot) -> bool,
    ) -> FetchSnapshot {
        loop {
            {
                let snapshot = rx.borrow();
                if pred(&snapshot) {
                    return snapshot.clone();
                }
            }
            rx.changed().await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_without_key() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let rx = client.subscribe(None);
        assert_eq!(rx.borrow().state, FetchState::Idle);
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_flow() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("react"));
        assert!(rx.borrow().state.is_loading());

        lookup.release("react");
        let snapshot = wait_until(&mut rx, |s| s.state.is_settled()).await;

        let series = snapshot.state.series().unwrap();
        assert_eq!(series.hashtag, "#react");
        assert!(!snapshot.revalidating);
        assert_eq!(lookup.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_key_becomes_failure() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("zzz"));
        lookup.release("zzz");

        let snapshot = wait_until(&mut rx, |s| s.state.is_settled()).await;
        assert_eq!(snapshot.state.error(), Some("Hashtag #zzz not found"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_key_is_normalized_before_lookup() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("#React"));
        lookup.release("react");

        let snapshot = wait_until(&mut rx, |s| s.state.is_settled()).await;
        assert_eq!(snapshot.state.series().unwrap().hashtag, "#react");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dedupe_within_window() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("react"));
        lookup.release("react");
        wait_until(&mut rx, |s| s.state.is_settled()).await;

        // Switch away and complete the other key.
        let mut rx = client.subscribe(Some("uri"));
        lookup.release("uri");
        wait_until(&mut rx, |s| s.state.is_settled()).await;
        assert_eq!(lookup.calls(), 2);

        // Back to the first key inside the window: served from cache, no
        // lookup, no Loading flicker.
        let rx = client.subscribe(Some("react"));
        assert_eq!(
            rx.borrow().state.series().map(|s| s.hashtag.clone()),
            Some("#react".to_string())
        );
        assert_eq!(lookup.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_cache_refetches() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("react"));
        lookup.release("react");
        wait_until(&mut rx, |s| s.state.is_settled()).await;

        let mut rx = client.subscribe(Some("uri"));
        lookup.release("uri");
        wait_until(&mut rx, |s| s.state.is_settled()).await;

        tokio::time::advance(Duration::from_secs(61)).await;

        let mut rx = client.subscribe(Some("react"));
        assert!(rx.borrow().state.is_loading());

        lookup.release("react");
        wait_until(&mut rx, |s| s.state.is_settled()).await;
        assert_eq!(lookup.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_bypasses_cache_and_revalidates() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("react"));
        lookup.release("react");
        wait_until(&mut rx, |s| s.state.is_settled()).await;

        client.retry();

        // The series stays visible while the re-fetch is in flight.
        let snapshot = rx.borrow().clone();
        assert!(snapshot.state.series().is_some());
        assert!(snapshot.revalidating);

        lookup.release("react");
        let snapshot = wait_until(&mut rx, |s| !s.revalidating).await;
        assert!(snapshot.state.series().is_some());
        assert_eq!(lookup.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_failure_reloads() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("zzz"));
        lookup.release("zzz");
        wait_until(&mut rx, |s| s.state.is_settled()).await;

        client.retry();
        assert!(rx.borrow().state.is_loading());

        lookup.release("zzz");
        let snapshot = wait_until(&mut rx, |s| s.state.is_settled()).await;
        assert_eq!(snapshot.state.error(), Some("Hashtag #zzz not found"));
        assert_eq!(lookup.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_does_not_overwrite() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        // First request left in flight.
        client.subscribe(Some("react"));

        // Key changes before the first lookup resolves.
        let mut rx = client.subscribe(Some("uri"));
        lookup.release("uri");
        wait_until(&mut rx, |s| s.state.is_settled()).await;

        // Now the abandoned request completes; it must be ignored.
        lookup.release("react");
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(
            rx.borrow().state.series().map(|s| s.hashtag.clone()),
            Some("#uri".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_subscribe_reuses_in_flight_request() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        client.subscribe(Some("react"));
        client.subscribe(Some("react"));
        client.subscribe(Some("#REACT"));

        // Let the single spawned lookup start before counting.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(lookup.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_key_returns_to_idle() {
        let lookup = Arc::new(GatedLookup::new());
        let client = client(Arc::clone(&lookup));

        let mut rx = client.subscribe(Some("react"));
        lookup.release("react");
        wait_until(&mut rx, |s| s.state.is_settled()).await;

        let rx = client.subscribe(None);
        assert_eq!(rx.borrow().state, FetchState::Idle);
    }
}
