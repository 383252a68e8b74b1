//! Review-score trend points for the performance chart.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::stats::{mean, round_to};

/// Trailing window, in days, of reviews feeding the trend.
pub const TREND_WINDOW_DAYS: i64 = 180;
/// The chart always shows this many points.
pub const TREND_POINTS: usize = 6;

/// Baseline and step for synthesized points when history is short.
const PAD_BASE: f64 = 75.0;
const PAD_STEP: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewScorePoint {
    pub review_date: NaiveDate,
    pub overall_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub struct TrendPoint {
    pub score: f64,
}

/// Per-date average of reviews within the window, oldest first, truncated
/// or padded to [`TREND_POINTS`].
pub fn performance_trend(reviews: &[ReviewScorePoint], today: NaiveDate) -> Vec<TrendPoint> {
    let since = today - Duration::days(TREND_WINDOW_DAYS);
    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for review in reviews.iter().filter(|r| r.review_date >= since) {
        by_date
            .entry(review.review_date)
            .or_default()
            .push(review.overall_score);
    }

    let mut points: Vec<TrendPoint> = by_date
        .values()
        .take(TREND_POINTS)
        .map(|scores| TrendPoint {
            score: round_to(mean(scores), 1),
        })
        .collect();

    while points.len() < TREND_POINTS {
        let score = PAD_BASE + points.len() as f64 * PAD_STEP;
        points.push(TrendPoint { score });
    }
    points
}
