//! Loading Component
//!
//! Skeleton placeholder occupying the trend card's layout slot while a fetch
//! is in flight, so the settled content causes no layout shift.

use leptos::*;

/// Skeleton loader matching the trend card layout
#[component]
pub fn TrendCardSkeleton() -> impl IntoView {
    view! {
        <div class="trend-card skeleton">
            <div class="trend-card-header">
                <div>
                    <div class="skeleton-line w-40 h-8" />
                    <div class="skeleton-line w-32 h-5" />
                </div>
                <div class="skeleton-line w-24 h-8 rounded-full" />
            </div>

            <div class="skeleton-block chart-slot" />

            <div class="trend-card-summary">
                <div class="skeleton-line w-28 h-5" />
                <div class="skeleton-line w-28 h-5" />
            </div>
        </div>
    }
}
