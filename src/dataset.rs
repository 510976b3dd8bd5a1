//! Trend Dataset
//!
//! The fixed in-memory mapping from hashtag key to a dated sentiment series.
//! Read-only at runtime; every series is owned by the dataset for the
//! lifetime of the process.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single dated sentiment observation.
///
/// Sentiment is a free real number; sample data stays within [-1, 1] but the
/// range is not enforced anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub sentiment: f64,
}

/// A hashtag's sentiment series over a labelled date range.
///
/// Field names match the wire format: `{hashtag, range, trend: [...]}`.
/// Invariant: `trend` is non-empty and chronological; first/last points feed
/// the direction computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Display form including the leading `#`, e.g. `#react`.
    pub hashtag: String,
    /// Human-readable range label, e.g. `Apr 1 - Apr 7, 2025`.
    pub range: String,
    pub trend: Vec<TrendPoint>,
}

impl TrendSeries {
    /// First point of the series. Safe under the non-empty invariant.
    pub fn first(&self) -> &TrendPoint {
        &self.trend[0]
    }

    /// Last point of the series.
    pub fn last(&self) -> &TrendPoint {
        &self.trend[self.trend.len() - 1]
    }
}

/// The built-in hashtag trend dataset.
#[derive(Debug, Clone)]
pub struct TrendDataset {
    entries: HashMap<String, TrendSeries>,
    /// Keys in presentation order for switcher controls.
    order: Vec<String>,
}

impl TrendDataset {
    /// Build the fixed sample dataset: four hashtags, one week of daily
    /// sentiment each.
    pub fn builtin() -> Self {
        let mut dataset = Self {
            entries: HashMap::new(),
            order: Vec::new(),
        };

        dataset.insert(series(
            "uri",
            &[-0.2, 0.0, 0.1, 0.3, 0.2, 0.4, 0.5],
        ));
        dataset.insert(series(
            "nextjs",
            &[0.3, 0.4, 0.5, 0.6, 0.5, 0.4, 0.3],
        ));
        dataset.insert(series(
            "react",
            &[0.1, -0.1, -0.2, 0.0, 0.2, 0.3, 0.4],
        ));
        dataset.insert(series(
            "typescript",
            &[0.2, 0.3, 0.1, 0.0, -0.1, 0.0, 0.2],
        ));

        dataset
    }

    fn insert(&mut self, series: TrendSeries) {
        let key = series.hashtag.trim_start_matches('#').to_string();
        self.order.push(key.clone());
        self.entries.insert(key, series);
    }

    /// Look up a series by normalized key.
    pub fn get(&self, key: &str) -> Option<&TrendSeries> {
        self.entries.get(key)
    }

    /// Available hashtag keys in presentation order.
    pub fn hashtags(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build one week of daily points starting Apr 1, 2025.
fn series(key: &str, sentiments: &[f64]) -> TrendSeries {
    let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

    let trend = sentiments
        .iter()
        .enumerate()
        .map(|(day, &sentiment)| TrendPoint {
            date: start + chrono::Days::new(day as u64),
            sentiment,
        })
        .collect();

    TrendSeries {
        hashtag: format!("#{}", key),
        range: "Apr 1 - Apr 7, 2025".to_string(),
        trend,
    }
}
