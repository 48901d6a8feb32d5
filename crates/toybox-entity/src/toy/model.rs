//! Toy entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use toybox_core::error::AppError;

use super::label::Label;
use super::message::Message;
use crate::user::MiniUser;

/// A toy in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toy {
    /// Unique toy identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Price, never negative.
    pub price: f64,
    /// Labels, without duplicates.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Whether the toy is currently in stock.
    pub in_stock: bool,
    /// When the toy was added.
    pub created_at: DateTime<Utc>,
    /// The user who added the toy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<MiniUser>,
    /// Discussion thread, oldest first.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Toy {
    /// Check whether the toy carries the given label.
    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Merge the provided fields of a patch over this record.
    ///
    /// Fields the patch leaves as `None` are untouched. The patch id is
    /// not compared here; callers select the record first.
    pub fn apply_patch(&mut self, patch: &ToyPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(labels) = &patch.labels {
            self.labels = Label::dedup(labels.clone());
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Data required to add a toy.
///
/// `id` and `created_at` are normally left empty and assigned by the
/// service; they are accepted for imports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewToy {
    /// Pre-assigned identifier.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Price.
    pub price: f64,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Stock flag, `true` when absent.
    #[serde(default)]
    pub in_stock: Option<bool>,
    /// Pre-assigned creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewToy {
    /// Check required fields and value ranges.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }

    /// Build the stored record, filling in server-assigned fields.
    pub fn into_toy(self, owner: Option<MiniUser>) -> Toy {
        Toy {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.trim().to_string(),
            price: self.price,
            labels: Label::dedup(self.labels),
            in_stock: self.in_stock.unwrap_or(true),
            created_at: self.created_at.unwrap_or_else(Utc::now),
            owner,
            messages: Vec::new(),
        }
    }
}

/// Partial update of a toy; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyPatch {
    /// Target toy.
    pub id: Uuid,
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Replacement label set.
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
    /// New stock flag.
    #[serde(default)]
    pub in_stock: Option<bool>,
}

impl ToyPatch {
    /// Create an empty patch for the given toy.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Check the provided fields.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.labels.is_none() && self.in_stock.is_none()
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Toy name is required"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation(format!(
            "Toy price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}
