//! Toy listing query parameters.
//!
//! Browsers send every filter field, often blank, so each value arrives as
//! a string and blanks mean "not set".

use serde::{Deserialize, Serialize};

use toybox_core::error::AppError;
use toybox_core::types::SortDirection;
use toybox_entity::toy::{Label, SortKey, ToyFilter};

/// Query string of `GET /api/toy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyQueryParams {
    /// Name substring.
    pub name: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<String>,
    /// Inclusive upper price bound.
    pub max_price: Option<String>,
    /// Comma-separated labels, all required.
    pub labels: Option<String>,
    /// `name`, `price` or `createdAt`.
    pub sort_by: Option<String>,
    /// `1` or `-1`.
    pub sort_dir: Option<String>,
    /// Zero-based page index.
    pub page_idx: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_price(field: &str, value: &Option<String>) -> Result<Option<f64>, AppError> {
    non_blank(value)
        .map(|v| {
            v.parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .ok_or_else(|| AppError::validation(format!("Invalid {field}: '{v}'")))
        })
        .transpose()
}

impl ToyQueryParams {
    /// Convert to a typed filter and page index.
    pub fn into_filter(self) -> Result<(ToyFilter, usize), AppError> {
        let labels = match non_blank(&self.labels) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::parse::<Label>)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let sort_by = match non_blank(&self.sort_by) {
            None => None,
            Some("name") => Some(SortKey::Name),
            Some("price") => Some(SortKey::Price),
            Some("createdAt") => Some(SortKey::CreatedAt),
            Some(other) => {
                return Err(AppError::validation(format!("Invalid sortBy: '{other}'")));
            }
        };

        let sort_dir = match non_blank(&self.sort_dir) {
            None => SortDirection::default(),
            Some(raw) => {
                let dir = raw
                    .parse::<i8>()
                    .map_err(|_| AppError::validation(format!("Invalid sortDir: '{raw}'")))?;
                SortDirection::try_from(dir)?
            }
        };

        let page_idx = match non_blank(&self.page_idx) {
            None => 0,
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| AppError::validation(format!("Invalid pageIdx: '{raw}'")))?,
        };

        let name = self.name.filter(|n| !n.trim().is_empty());

        let filter = ToyFilter {
            name,
            min_price: parse_price("minPrice", &self.min_price)?,
            max_price: parse_price("maxPrice", &self.max_price)?,
            labels,
            sort_by,
            sort_dir,
        };

        Ok((filter, page_idx))
    }
}
