//! In-memory toy store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use toybox_core::error::AppError;
use toybox_core::result::AppResult;
use toybox_entity::toy::{Message, Toy, ToyFilter, ToyPatch};

use crate::store::ToyStore;

/// Toy store holding every record in a vector.
#[derive(Debug, Default)]
pub struct MemoryToyStore {
    toys: RwLock<Vec<Toy>>,
}

impl MemoryToyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given toys, in order.
    pub fn with_toys(toys: Vec<Toy>) -> Self {
        Self {
            toys: RwLock::new(toys),
        }
    }

    /// Number of stored toys.
    pub async fn len(&self) -> usize {
        self.toys.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.toys.read().await.is_empty()
    }
}

#[async_trait]
impl ToyStore for MemoryToyStore {
    async fn find_many(&self, filter: &ToyFilter) -> AppResult<Vec<Toy>> {
        let toys = self.toys.read().await;
        Ok(toys.iter().filter(|t| filter.matches(t)).cloned().collect())
    }

    async fn find_one(&self, id: Uuid) -> AppResult<Option<Toy>> {
        let toys = self.toys.read().await;
        Ok(toys.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, toy: &Toy) -> AppResult<()> {
        let mut toys = self.toys.write().await;
        if toys.iter().any(|t| t.id == toy.id) {
            return Err(AppError::conflict(format!("Toy {} already exists", toy.id)));
        }
        toys.push(toy.clone());
        Ok(())
    }

    async fn update_fields(&self, patch: &ToyPatch) -> AppResult<Option<Toy>> {
        let mut toys = self.toys.write().await;
        Ok(toys.iter_mut().find(|t| t.id == patch.id).map(|toy| {
            toy.apply_patch(patch);
            toy.clone()
        }))
    }

    async fn delete_one(&self, id: Uuid) -> AppResult<u64> {
        let mut toys = self.toys.write().await;
        let before = toys.len();
        toys.retain(|t| t.id != id);
        Ok((before - toys.len()) as u64)
    }

    async fn push_message(&self, toy_id: Uuid, message: &Message) -> AppResult<bool> {
        let mut toys = self.toys.write().await;
        match toys.iter_mut().find(|t| t.id == toy_id) {
            Some(toy) => {
                toy.messages.push(message.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_message(&self, toy_id: Uuid, message_id: Uuid) -> AppResult<bool> {
        let mut toys = self.toys.write().await;
        match toys.iter_mut().find(|t| t.id == toy_id) {
            Some(toy) => {
                toy.messages.retain(|m| m.id != message_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toybox_core::error::ErrorKind;
    use toybox_entity::toy::{Label, NewToy};
    use toybox_entity::user::MiniUser;

    fn toy(name: &str, price: f64, labels: Vec<Label>) -> Toy {
        NewToy {
            name: name.to_string(),
            price,
            labels,
            ..NewToy::default()
        }
        .into_toy(None)
    }

    fn author() -> MiniUser {
        MiniUser {
            id: Uuid::new_v4(),
            fullname: "Muki Ja".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_many_keeps_insertion_order() {
        let store = MemoryToyStore::new();
        for name in ["c", "a", "b"] {
            store.insert(&toy(name, 1.0, vec![])).await.unwrap();
        }

        let names: Vec<String> = store
            .find_many(&ToyFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_find_many_applies_predicate() {
        let store = MemoryToyStore::with_toys(vec![
            toy("Car", 20.0, vec![Label::OnWheels]),
            toy("Doll", 15.0, vec![Label::Doll]),
        ]);
        let filter = ToyFilter {
            labels: vec![Label::OnWheels],
            ..ToyFilter::default()
        };
        let found = store.find_many(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Car");
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let store = MemoryToyStore::new();
        let car = toy("Car", 20.0, vec![]);
        store.insert(&car).await.unwrap();
        let err = store.insert(&car).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_fields_merges() {
        let car = toy("Car", 20.0, vec![Label::OnWheels]);
        let store = MemoryToyStore::with_toys(vec![car.clone()]);

        let mut patch = ToyPatch::new(car.id);
        patch.in_stock = Some(false);
        let updated = store.update_fields(&patch).await.unwrap().unwrap();
        assert!(!updated.in_stock);
        assert_eq!(updated.name, "Car");
        assert_eq!(updated.labels, vec![Label::OnWheels]);

        let missing = store.update_fields(&ToyPatch::new(Uuid::new_v4())).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_one_counts() {
        let car = toy("Car", 20.0, vec![]);
        let store = MemoryToyStore::with_toys(vec![car.clone()]);
        assert_eq!(store.delete_one(car.id).await.unwrap(), 1);
        assert_eq!(store.delete_one(car.id).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_push_and_pull_message() {
        let car = toy("Car", 20.0, vec![]);
        let store = MemoryToyStore::with_toys(vec![car.clone()]);
        let first = Message::new("first", author());
        let second = Message::new("second", author());

        assert!(store.push_message(car.id, &first).await.unwrap());
        assert!(store.push_message(car.id, &second).await.unwrap());
        assert!(store.pull_message(car.id, first.id).await.unwrap());
        // Pulling an absent message still reports the toy as present.
        assert!(store.pull_message(car.id, Uuid::new_v4()).await.unwrap());

        let stored = store.find_one(car.id).await.unwrap().unwrap();
        assert_eq!(stored.messages, vec![second]);

        assert!(!store.push_message(Uuid::new_v4(), &first).await.unwrap());
        assert!(!store.pull_message(Uuid::new_v4(), first.id).await.unwrap());
    }
}
