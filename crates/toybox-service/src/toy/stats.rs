//! Per-label aggregates and the monthly creation trend.
//!
//! Everything here is a pure function of a toy snapshot (and, for the
//! trend, a reference instant) so it can be tested without a store.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use toybox_entity::toy::{Label, Toy};

/// Number of calendar months covered by the trend, current month included.
pub const TREND_MONTHS: i32 = 6;

/// Dashboard statistics over the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyStats {
    /// Mean price per label, rounded to cents.
    pub avg_price_per_label: BTreeMap<Label, f64>,
    /// Percentage of in-stock toys per label, rounded to two decimals.
    pub in_stock_percent_by_label: BTreeMap<Label, f64>,
    /// Toys created per month, oldest month first.
    pub trend: Vec<TrendPoint>,
}

/// One month of the creation trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// First day of the month, `YYYY-MM-DD`.
    pub date: String,
    /// Toys created during that month.
    pub value: usize,
}

/// Toy counts for a single label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    /// Toys carrying the label.
    pub total: usize,
    /// Of those, how many are in stock.
    pub in_stock: usize,
}

#[derive(Default)]
struct Bucket {
    count: usize,
    in_stock: usize,
    price_sum: f64,
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute dashboard statistics for a snapshot, relative to `now`.
///
/// Only labels present on at least one toy appear in the maps. A toy with
/// several labels counts towards each of them.
pub fn compute_stats(toys: &[Toy], now: DateTime<Utc>) -> ToyStats {
    let mut buckets: BTreeMap<Label, Bucket> = BTreeMap::new();
    for toy in toys {
        for label in &toy.labels {
            let bucket = buckets.entry(*label).or_default();
            bucket.count += 1;
            bucket.price_sum += toy.price;
            if toy.in_stock {
                bucket.in_stock += 1;
            }
        }
    }

    let mut avg_price_per_label = BTreeMap::new();
    let mut in_stock_percent_by_label = BTreeMap::new();
    for (label, bucket) in &buckets {
        let count = bucket.count as f64;
        avg_price_per_label.insert(*label, round2(bucket.price_sum / count));
        in_stock_percent_by_label.insert(*label, round2(bucket.in_stock as f64 / count * 100.0));
    }

    ToyStats {
        avg_price_per_label,
        in_stock_percent_by_label,
        trend: creation_trend(toys, now),
    }
}

/// Per-label totals over the full vocabulary, zeros included.
pub fn count_labels(toys: &[Toy]) -> BTreeMap<Label, LabelCount> {
    let mut counts: BTreeMap<Label, LabelCount> = Label::ALL
        .iter()
        .map(|label| (*label, LabelCount::default()))
        .collect();

    for toy in toys {
        for label in &toy.labels {
            let entry = counts.entry(*label).or_default();
            entry.total += 1;
            if toy.in_stock {
                entry.in_stock += 1;
            }
        }
    }
    counts
}

/// Months since year zero, so month arithmetic is plain integer math.
fn month_index(year: i32, month0: u32) -> i32 {
    year * 12 + month0 as i32
}

/// Toys created in each of the trailing months ending at `now`'s month.
fn creation_trend(toys: &[Toy], now: DateTime<Utc>) -> Vec<TrendPoint> {
    let current = month_index(now.year(), now.month0());
    let first = current - (TREND_MONTHS - 1);

    let mut counts = vec![0usize; TREND_MONTHS as usize];
    for toy in toys {
        let idx = month_index(toy.created_at.year(), toy.created_at.month0());
        if (first..=current).contains(&idx) {
            counts[(idx - first) as usize] += 1;
        }
    }

    (first..=current)
        .zip(counts)
        .filter_map(|(idx, value)| {
            let date = NaiveDate::from_ymd_opt(idx.div_euclid(12), idx.rem_euclid(12) as u32 + 1, 1)?;
            Some(TrendPoint {
                date: date.format("%Y-%m-%d").to_string(),
                value,
            })
        })
        .collect()
}
