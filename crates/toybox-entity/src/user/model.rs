//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name (compared case-insensitively).
    pub username: String,
    /// Human-readable name.
    pub fullname: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Whether the user may perform admin-only operations.
    #[serde(default)]
    pub is_admin: bool,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The public projection embedded in toys and messages.
    pub fn to_mini(&self) -> MiniUser {
        MiniUser {
            id: self.id,
            fullname: self.fullname.clone(),
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Display name.
    pub fullname: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Admin flag.
    pub is_admin: bool,
}

impl CreateUser {
    /// Build the stored record with a fresh id and timestamp.
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            username: self.username,
            fullname: self.fullname,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            created_at: Utc::now(),
        }
    }
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New display name.
    pub fullname: Option<String>,
}

/// Public `{id, fullname}` reference to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniUser {
    /// User id.
    pub id: Uuid,
    /// Display name at the time of reference.
    pub fullname: String,
}

/// Identity carried by a valid login token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub fullname: String,
    /// Admin flag.
    pub is_admin: bool,
}

impl LoggedInUser {
    /// The public projection of the caller.
    pub fn to_mini(&self) -> MiniUser {
        MiniUser {
            id: self.id,
            fullname: self.fullname.clone(),
        }
    }
}

impl From<&User> for LoggedInUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname.clone(),
            is_admin: user.is_admin,
        }
    }
}
