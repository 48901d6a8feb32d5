//! Toy label vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tag from the fixed label vocabulary.
///
/// The vocabulary is closed: anything else is rejected when parsed or
/// deserialized. Variants are declared in display order, which is also
/// the `Ord` order used for stats maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Cars, trains, anything that rolls.
    #[serde(rename = "On wheels")]
    OnWheels,
    /// Board and card games.
    #[serde(rename = "Box game")]
    BoxGame,
    /// Drawing, crafts, painting.
    Art,
    /// Toys for infants.
    Baby,
    /// Dolls and figures.
    Doll,
    /// Jigsaws and brain teasers.
    Puzzle,
    /// Outdoor play.
    Outdoor,
    /// Anything needing batteries.
    #[serde(rename = "Battery Powered")]
    BatteryPowered,
}

impl Label {
    /// Every label, in display order.
    pub const ALL: [Label; 8] = [
        Self::OnWheels,
        Self::BoxGame,
        Self::Art,
        Self::Baby,
        Self::Doll,
        Self::Puzzle,
        Self::Outdoor,
        Self::BatteryPowered,
    ];

    /// Return the label as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnWheels => "On wheels",
            Self::BoxGame => "Box game",
            Self::Art => "Art",
            Self::Baby => "Baby",
            Self::Doll => "Doll",
            Self::Puzzle => "Puzzle",
            Self::Outdoor => "Outdoor",
            Self::BatteryPowered => "Battery Powered",
        }
    }

    /// Drop duplicates, keeping the first occurrence of each label.
    pub fn dedup(labels: Vec<Label>) -> Vec<Label> {
        let mut seen = Vec::with_capacity(labels.len());
        for label in labels {
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = toybox_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| toybox_core::AppError::validation(format!("Invalid label: '{s}'")))
    }
}
