//! Toy catalog operations over an injected [`ToyStore`].

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use toybox_core::error::AppError;
use toybox_core::types::PageSlice;
use toybox_database::store::ToyStore;
use toybox_entity::toy::{Label, Message, NewToy, Toy, ToyFilter, ToyPatch};
use toybox_entity::user::MiniUser;

use super::stats::{self, LabelCount, ToyStats};

/// Number of toys per page of query results.
pub const PAGE_SIZE: usize = 4;

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyPage {
    /// Toys on this page.
    pub toys: Vec<Toy>,
    /// Toys matching the filter across all pages.
    pub total_count: usize,
    /// Page size used to cut the results.
    pub page_size: usize,
}

/// Filtering, sorting, pagination, mutation and statistics over toys.
///
/// Holds no state of its own; every call reads or writes through the store.
#[derive(Clone)]
pub struct ToyService {
    /// Toy record store.
    store: Arc<dyn ToyStore>,
}

impl std::fmt::Debug for ToyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToyService").finish_non_exhaustive()
    }
}

impl ToyService {
    /// Creates a new toy service.
    pub fn new(store: Arc<dyn ToyStore>) -> Self {
        Self { store }
    }

    /// Filter, sort and paginate the catalog.
    ///
    /// `total_count` is taken before pagination. A page past the end is
    /// empty.
    pub async fn query(&self, filter: &ToyFilter, page_idx: usize) -> Result<ToyPage, AppError> {
        let mut toys = self.store.find_many(filter).await?;
        let total_count = toys.len();

        filter.sort(&mut toys);
        let toys = PageSlice::new(page_idx, PAGE_SIZE).apply(toys);

        debug!(
            total_count,
            page_idx,
            returned = toys.len(),
            "Queried toys"
        );

        Ok(ToyPage {
            toys,
            total_count,
            page_size: PAGE_SIZE,
        })
    }

    /// Get a toy by id.
    pub async fn get_by_id(&self, toy_id: Uuid) -> Result<Toy, AppError> {
        self.store
            .find_one(toy_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Toy {toy_id} not found")))
    }

    /// Validate and store a new toy, returning the stored record.
    pub async fn add_toy(&self, new: NewToy, owner: Option<MiniUser>) -> Result<Toy, AppError> {
        new.validate()?;
        let toy = new.into_toy(owner);
        self.store.insert(&toy).await?;

        info!(toy_id = %toy.id, name = %toy.name, price = toy.price, "Toy added");

        Ok(toy)
    }

    /// Merge the provided fields over an existing toy.
    pub async fn update_toy(&self, mut patch: ToyPatch) -> Result<Toy, AppError> {
        patch.validate()?;
        if let Some(name) = patch.name.as_mut() {
            *name = name.trim().to_string();
        }
        if patch.is_empty() {
            return self.get_by_id(patch.id).await;
        }

        let toy = self
            .store
            .update_fields(&patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Toy {} not found", patch.id)))?;

        info!(toy_id = %toy.id, "Toy updated");

        Ok(toy)
    }

    /// Delete a toy. Fails with not-found if nothing was removed.
    pub async fn remove_toy(&self, toy_id: Uuid) -> Result<u64, AppError> {
        let deleted = self.store.delete_one(toy_id).await?;
        if deleted == 0 {
            return Err(AppError::not_found(format!("Toy {toy_id} not found")));
        }

        info!(toy_id = %toy_id, "Toy removed");

        Ok(deleted)
    }

    /// Append a message to a toy's thread.
    pub async fn add_message(
        &self,
        toy_id: Uuid,
        text: &str,
        author: MiniUser,
    ) -> Result<Message, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Message text is required"));
        }

        let message = Message::new(text, author);
        if !self.store.push_message(toy_id, &message).await? {
            return Err(AppError::not_found(format!("Toy {toy_id} not found")));
        }

        info!(toy_id = %toy_id, message_id = %message.id, "Message added");

        Ok(message)
    }

    /// Remove a message from a toy's thread.
    ///
    /// A message id that is not on the toy is ignored; only a missing toy
    /// is an error.
    pub async fn remove_message(&self, toy_id: Uuid, message_id: Uuid) -> Result<Uuid, AppError> {
        if !self.store.pull_message(toy_id, message_id).await? {
            return Err(AppError::not_found(format!("Toy {toy_id} not found")));
        }

        info!(toy_id = %toy_id, message_id = %message_id, "Message removed");

        Ok(message_id)
    }

    /// The label vocabulary, in display order.
    pub fn get_labels(&self) -> Vec<Label> {
        Label::ALL.to_vec()
    }

    /// Total and in-stock counts for every label.
    pub async fn get_labels_count(&self) -> Result<BTreeMap<Label, LabelCount>, AppError> {
        let toys = self.store.find_many(&ToyFilter::default()).await?;
        Ok(stats::count_labels(&toys))
    }

    /// Dashboard statistics over the whole catalog.
    pub async fn get_stats(&self) -> Result<ToyStats, AppError> {
        let toys = self.store.find_many(&ToyFilter::default()).await?;
        Ok(stats::compute_stats(&toys, Utc::now()))
    }
}
