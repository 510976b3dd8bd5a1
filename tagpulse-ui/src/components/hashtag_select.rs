//! Hashtag Select Component
//!
//! Dropdown to switch the active hashtag; changing it navigates to the new
//! insights route, which restarts the fetch machine for the new key.

use leptos::*;
use leptos_router::use_navigate;

/// Hashtag keys available in the dataset, in presentation order.
pub const AVAILABLE_HASHTAGS: [&str; 4] = ["uri", "nextjs", "react", "typescript"];

/// Hashtag switcher component
#[component]
pub fn HashtagSelect(
    /// Currently active normalized hashtag key
    #[prop(into)]
    current: Signal<String>,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="hashtag-select">
            <label for="hashtag-select">"Switch hashtag:"</label>
            <select
                id="hashtag-select"
                on:change=move |ev| {
                    let key = event_target_value(&ev);
                    navigate(&format!("/insights/{}", key), Default::default());
                }
            >
                {AVAILABLE_HASHTAGS
                    .iter()
                    .map(|&tag| {
                        view! {
                            <option value=tag selected=move || current.get() == tag>
                                {format!("#{}", tag)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
