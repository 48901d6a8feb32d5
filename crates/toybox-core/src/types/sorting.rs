//! Sorting types for list endpoints.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
///
/// On the wire this is the integer `1` (ascending) or `-1` (descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl TryFrom<i8> for SortDirection {
    type Error = AppError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Asc),
            -1 => Ok(Self::Desc),
            other => Err(AppError::validation(format!(
                "Invalid sort direction: {other}. Expected 1 or -1"
            ))),
        }
    }
}

impl From<SortDirection> for i8 {
    fn from(dir: SortDirection) -> i8 {
        match dir {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}
