//! Insights Page
//!
//! Sentiment trend view for the hashtag in the route: skeleton while
//! loading, error panel with retry on failure, trend card on success.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::components::{ErrorState, HashtagSelect, TrendCard, TrendCardSkeleton};
use crate::state::theme::ThemeState;
use crate::state::trend::{normalize_key, use_hashtag_trend, FetchState};

/// Hashtag shown when the route carries no key.
pub const DEFAULT_HASHTAG: &str = "uri";

/// Insights page component
#[component]
pub fn Insights() -> impl IntoView {
    let params = use_params_map();
    let hashtag = create_memo(move |_| {
        params.with(|p| p.get("hashtag").cloned().filter(|h| !h.is_empty()))
    });

    // A missing route key redirects to the default hashtag.
    let navigate = use_navigate();
    create_effect(move |_| {
        if hashtag.get().is_none() {
            navigate(&format!("/insights/{}", DEFAULT_HASHTAG), Default::default());
        }
    });

    let current_key = create_memo(move |_| {
        hashtag
            .get()
            .map(|raw| normalize_key(&raw))
            .unwrap_or_else(|| DEFAULT_HASHTAG.to_string())
    });

    let fetch = use_hashtag_trend(hashtag);
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    // Page title follows the active hashtag.
    create_effect(move |_| {
        document().set_title(&format!("Sentiment Analysis | #{}", current_key.get()));
    });

    view! {
        <div class="insights-page">
            <header class="page-header">
                <h1>"Hashtag Sentiment Insights"</h1>
                <button
                    class="theme-toggle"
                    title="Toggle color mode"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.is_dark() { "☀" } else { "🌙" }}
                </button>
            </header>

            <HashtagSelect current=Signal::derive(move || current_key.get()) />

            <section class="trend-slot">
                {move || match fetch.state.get() {
                    FetchState::Idle => ().into_view(),
                    FetchState::Loading => view! { <TrendCardSkeleton /> }.into_view(),
                    FetchState::Failure(message) => view! {
                        <ErrorState
                            message=message
                            on_retry=Callback::new(move |_| fetch.retry())
                        />
                    }
                    .into_view(),
                    FetchState::Success(series) => view! { <TrendCard series=series /> }.into_view(),
                }}

                {move || {
                    fetch
                        .revalidating
                        .get()
                        .then(|| view! { <p class="revalidating-note">"Refreshing…"</p> })
                }}
            </section>
        </div>
    }
}
