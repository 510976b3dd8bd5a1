//! Error State Component
//!
//! Error panel with a retry button.

use leptos::*;

use crate::api::GENERIC_FETCH_ERROR;

/// Error panel component
#[component]
pub fn ErrorState(
    /// Failure message to display; empty falls back to the generic message
    #[prop(into)]
    message: String,
    /// Wired to the fetch machine's retry
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    let message = if message.is_empty() {
        GENERIC_FETCH_ERROR.to_string()
    } else {
        message
    };

    view! {
        <div class="error-panel">
            <div class="error-icon">"⚠"</div>
            <h2>"Oops! Something went wrong"</h2>
            <p class="error-message">{message}</p>
            <button class="retry-button" on:click=move |_| on_retry.call(())>
                "Try Again"
            </button>
        </div>
    }
}
