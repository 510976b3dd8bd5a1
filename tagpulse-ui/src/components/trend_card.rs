//! Trend Card Component
//!
//! The main insights card: hashtag header, direction chip, sentiment chart,
//! and min/max summary.

use leptos::*;

use crate::analytics::{analyze, Direction};
use crate::components::chart::SentimentChart;
use crate::state::trend::TrendSeries;

/// Trend card component
#[component]
pub fn TrendCard(series: TrendSeries) -> impl IntoView {
    let analytics = analyze(&series.trend);

    let (arrow, chip_class) = match analytics.direction {
        Direction::Up => ("↑", "trend-chip up"),
        Direction::Down => ("↓", "trend-chip down"),
        Direction::Neutral => ("→", "trend-chip neutral"),
    };
    let badge = analytics.badge_label();
    let min_label = analytics.min_label();
    let max_label = analytics.max_label();

    let hashtag = series.hashtag.clone();
    let range = series.range.clone();

    view! {
        <div class="trend-card">
            <div class="trend-card-header">
                <div>
                    <h2 class="trend-card-title">{hashtag}</h2>
                    <p class="trend-card-range">{range}</p>
                </div>
                <span class=chip_class>
                    <span class="trend-chip-icon">{arrow}</span>
                    " "
                    {badge}
                </span>
            </div>

            <SentimentChart series=series />

            <div class="trend-card-summary">
                <span>
                    "Lowest sentiment: "
                    <strong class="sentiment-min">{min_label}</strong>
                </span>
                <span>
                    "Highest sentiment: "
                    <strong class="sentiment-max">{max_label}</strong>
                </span>
            </div>
        </div>
    }
}
