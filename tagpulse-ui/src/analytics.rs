//! Trend Analytics
//!
//! Display metrics derived from a sentiment series: direction, percentage
//! change, extrema, and chart axis bounds. Mirrors the native crate's
//! arithmetic; this dashboard ships as a standalone WASM crate.

use crate::state::trend::TrendPoint;

/// Net movement beyond this delta classifies as up/down (strict compare).
const DIRECTION_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

/// Derived display metrics for a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analytics {
    pub direction: Direction,
    pub percent_change: f64,
    pub min_sentiment: f64,
    pub max_sentiment: f64,
}

impl Analytics {
    /// Direction chip label: `Stable`, or `<percent>% up` / `<percent>% down`.
    pub fn badge_label(&self) -> String {
        let percent = format!("{:.1}", self.percent_change.abs());
        match self.direction {
            Direction::Neutral => "Stable".to_string(),
            Direction::Up => format!("{}% up", percent),
            Direction::Down => format!("{}% down", percent),
        }
    }

    pub fn min_label(&self) -> String {
        format!("{:.2}", self.min_sentiment)
    }

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

/// Derive display metrics from a non-empty series.
pub fn analyze(points: &[TrendPoint]) -> Analytics {
    let first = points[0].sentiment;
    let last = points[points.len() - 1].sentiment;
    let delta = last - first;

    let direction = if delta > DIRECTION_THRESHOLD {
        Direction::Up
    } else if delta < -DIRECTION_THRESHOLD {
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
    for point in points {
        min_sentiment = min_sentiment.min(point.sentiment);
        max_sentiment = max_sentiment.max(point.sentiment);
    }

    Analytics {
        direction,
        percent_change,
        min_sentiment,
        max_sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(sentiments: &[f64]) -> Vec<TrendPoint> {
        sentiments
            .iter()
            .enumerate()
            .map(|(day, &sentiment)| TrendPoint {
                date: format!("2025-04-{:02}", day + 1),
                sentiment,
            })
            .collect()
    }

    #[test]
    fn test_rising_series() {
        let result = analyze(&points(&[0.1, -0.1, -0.2, 0.0, 0.2, 0.3, 0.4]));

        assert_eq!(result.direction, Direction::Up);
        assert!((result.percent_change - 300.0).abs() < 1e-9);
        assert_eq!(result.badge_label(), "300.0% up");
        assert_eq!(result.min_label(), "-0.20");
        assert_eq!(result.max_label(), "0.40");
    }

    #[test]
    fn test_flat_series_is_stable() {
        let result = analyze(&points(&[0.3, 0.4, 0.5, 0.6, 0.5, 0.4, 0.3]));

        assert_eq!(result.direction, Direction::Neutral);
        assert_eq!(result.badge_label(), "Stable");
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(analyze(&points(&[0.10, 0.15])).direction, Direction::Neutral);
        assert_eq!(analyze(&points(&[0.15, 0.10])).direction, Direction::Neutral);
        assert_eq!(analyze(&points(&[0.10, 0.16])).direction, Direction::Up);
    }

    #[test]
    fn test_zero_baseline() {
        let result = analyze(&points(&[0.0, 0.3]));

        assert_eq!(result.direction, Direction::Up);
        assert!((result.percent_change - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point() {
        let result = analyze(&points(&[0.42]));

        assert_eq!(result.direction, Direction::Neutral);
        assert_eq!(result.percent_change, 0.0);
        assert_eq!(result.min_sentiment, result.max_sentiment);
    }

    #[test]
    fn test_axis_bounds() {
        let result = analyze(&points(&[-0.25, 0.18]));
        let (lower, upper) = result.axis_bounds();

        assert!((lower - (-0.4)).abs() < 1e-9);
        assert!((upper - 0.3).abs() < 1e-9);
    }
}
