//! Trend Analytics
//!
//! Pure computation over a fetched series: direction classification,
//! percentage change, min/max extraction, and chart axis bounds. Results are
//! derived fresh from a series on demand and never stored.

use serde::Serialize;
use std::fmt;

use crate::dataset::TrendSeries;

/// Net movement above this delta classifies as [`Direction::Up`] (strict).
pub const UP_THRESHOLD: f64 = 0.05;

/// Net movement below this delta classifies as [`Direction::Down`] (strict).
pub const DOWN_THRESHOLD: f64 = -0.05;

/// Classification of a series' net movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Neutral => write!(f, "neutral"),
        }
    }
}

/// Derived display metrics for a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsResult {
    pub direction: Direction,
    /// Signed relative change in percent; sign is dropped for display.
    pub percent_change: f64,
    pub min_sentiment: f64,
    pub max_sentiment: f64,
}

impl AnalyticsResult {
    /// Percentage for display: absolute value, one decimal place.
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent_change.abs())
    }

    /// Direction chip label: `Stable`, or `<percent>% up` / `<percent>% down`.
    pub fn badge_label(&self) -> String {
        match self.direction {
            Direction::Neutral => "Stable".to_string(),
            Direction::Up => format!("{}% up", self.percent_label()),
            Direction::Down => format!("{}% down", self.percent_label()),
        }
    }

    /// Min sentiment for the summary line, two decimal places.
    pub fn min_label(&self) -> String {
        format!("{:.2}", self.min_sentiment)
    }

    /// Max sentiment for the summary line, two decimal places.
    pub fn max_label(&self) -> String {
        format!("{:.2}", self.max_sentiment)
    }

    /// Chart y-axis bounds: extrema snapped outward to the nearest 0.1, then
    /// padded by a further 0.1.
    pub fn axis_bounds(&self) -> (f64, f64) {
        let lower = (self.min_sentiment * 10.0).floor() / 10.0 - 0.1;
        let upper = (self.max_sentiment * 10.0).ceil() / 10.0 + 0.1;
        (lower, upper)
    }
}

/// Derive display metrics from a series.
///
/// Requires a non-empty series; the dataset and wire contract guarantee this
/// for every series that reaches here.
pub fn analyze(series: &TrendSeries) -> AnalyticsResult {
    let first = series.first().sentiment;
    let last = series.last().sentiment;
    let delta = last - first;

    let direction = if delta > UP_THRESHOLD {
        Direction::Up
    } else if delta < DOWN_THRESHOLD {
        Direction::Down
    } else {
        Direction::Neutral
    };

    // Relative change is undefined at a zero baseline; fall back to the
    // absolute change scaled to percent.
    let percent_change = if first != 0.0 {
        (delta / first.abs()) * 100.0
    } else {
        delta * 100.0
    };

    let mut min_sentiment = f64::INFINITY;
    let mut max_sentiment = f64::NEG_INFINITY;
    for point in &series.trend {
        min_sentiment = min_sentiment.min(point.sentiment);
        max_sentiment = max_sentiment.max(point.sentiment);
    }

    AnalyticsResult {
        direction,
        percent_change,
        min_sentiment,
        max_sentiment,
    }
}
