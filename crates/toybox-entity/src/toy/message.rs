//! Discussion message attached to a toy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::MiniUser;

/// A message in a toy's discussion thread.
///
/// Owned by exactly one toy; ids are unique within that toy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message identifier.
    pub id: Uuid,
    /// Message body.
    pub text: String,
    /// Who wrote it.
    pub author: MiniUser,
    /// When it was posted.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with a fresh id and the current time.
    pub fn new(text: impl Into<String>, author: MiniUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author,
            created_at: Utc::now(),
        }
    }
}
