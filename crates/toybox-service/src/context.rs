//! Request context carrying the authenticated caller.

use uuid::Uuid;

use toybox_entity::user::{LoggedInUser, MiniUser};

/// Context for the current authenticated request.
///
/// Built from the login token by the API layer and passed into service
/// methods that need to know *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The caller identity from the login token.
    pub user: LoggedInUser,
}

impl RequestContext {
    /// Creates a context for the given caller.
    pub fn new(user: LoggedInUser) -> Self {
        Self { user }
    }

    /// The caller's user id.
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }

    /// The caller as embedded in toys and messages.
    pub fn as_mini(&self) -> MiniUser {
        self.user.to_mini()
    }
}
