//! User directory operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use toybox_core::error::AppError;
use toybox_database::store::UserStore;
use toybox_entity::user::{UpdateUser, User};

use crate::context::RequestContext;

/// Lists, updates and removes user accounts.
#[derive(Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// All users, oldest first.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.users.find_all().await
    }

    /// A single user by id.
    pub async fn get_by_id(&self, user_id: Uuid) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Update a profile. Callers may edit themselves; admins anyone.
    pub async fn update(&self, ctx: &RequestContext, data: UpdateUser) -> Result<User, AppError> {
        if data.id != ctx.user_id() && !ctx.is_admin() {
            return Err(AppError::authorization(format!(
                "User {} may not edit user {}",
                ctx.user_id(),
                data.id
            )));
        }

        let data = UpdateUser {
            fullname: match data.fullname {
                Some(name) if name.trim().is_empty() => {
                    return Err(AppError::validation("Full name cannot be empty"));
                }
                other => other.map(|name| name.trim().to_string()),
            },
            ..data
        };

        let user = self
            .users
            .update(&data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))?;

        info!(user_id = %user.id, by = %ctx.user_id(), "User updated");

        Ok(user)
    }

    /// Delete an account. Admin only.
    pub async fn remove(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Only admins may remove users"));
        }
        if !self.users.delete(user_id).await? {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }

        info!(user_id = %user_id, by = %ctx.user_id(), "User removed");

        Ok(())
    }
}
