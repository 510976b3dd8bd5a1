//! UI Components
//!
//! Reusable Leptos components for the insights dashboard.

pub mod chart;
pub mod error_state;
pub mod hashtag_select;
pub mod loading;
pub mod trend_card;

pub use chart::SentimentChart;
pub use error_state::ErrorState;
pub use hashtag_select::HashtagSelect;
pub use loading::TrendCardSkeleton;
pub use trend_card::TrendCard;
