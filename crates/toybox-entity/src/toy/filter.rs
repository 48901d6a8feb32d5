//! Toy filter criteria and sort keys.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use toybox_core::types::SortDirection;

use super::label::Label;
use super::model::Toy;

/// Field a toy listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Locale-aware name order.
    Name,
    /// Numeric price order.
    Price,
    /// Chronological order.
    CreatedAt,
}

impl SortKey {
    /// Compare two toys ascending by this key.
    pub fn compare(&self, a: &Toy, b: &Toy) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::Price => a.price.total_cmp(&b.price),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

/// Case-folded comparison first; among names equal up to case, lowercase
/// sorts before uppercase.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Criteria for selecting and ordering toys.
///
/// Every criterion is optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyFilter {
    /// Case-insensitive substring of the name.
    #[serde(default)]
    pub name: Option<String>,
    /// Inclusive lower price bound.
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    #[serde(default)]
    pub max_price: Option<f64>,
    /// Labels a toy must all carry.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Sort key; `None` keeps store order.
    #[serde(default)]
    pub sort_by: Option<SortKey>,
    /// Sort direction.
    #[serde(default)]
    pub sort_dir: SortDirection,
}

impl ToyFilter {
    /// The name needle, lowercased, or `None` when absent or blank.
    ///
    /// Surrounding whitespace is part of the needle.
    pub fn name_needle(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Whether a toy satisfies every criterion.
    pub fn matches(&self, toy: &Toy) -> bool {
        if let Some(needle) = self.name_needle() {
            if !toy.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if toy.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if toy.price > max {
                return false;
            }
        }
        self.labels.iter().all(|label| toy.has_label(*label))
    }

    /// Stable-sort toys by the configured key and direction.
    ///
    /// Without a sort key the input order is kept.
    pub fn sort(&self, toys: &mut [Toy]) {
        if let Some(key) = self.sort_by {
            let dir = self.sort_dir;
            toys.sort_by(|a, b| dir.apply(key.compare(a, b)));
        }
    }
}
