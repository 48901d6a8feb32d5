//! In-memory user store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use toybox_core::error::AppError;
use toybox_core::result::AppResult;
use toybox_entity::user::{UpdateUser, User};

use crate::store::UserStore;

/// User store holding every account in a vector.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let key = username.to_lowercase();
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username.to_lowercase() == key)
            .cloned())
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        let key = user.username.to_lowercase();
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.id == user.id || u.username.to_lowercase() == key)
        {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, data: &UpdateUser) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == data.id).map(|user| {
            if let Some(fullname) = &data.fullname {
                user.fullname = fullname.clone();
            }
            user.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}
