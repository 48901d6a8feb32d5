//! Record store contracts consumed by the service layer.
//!
//! Both traits are object safe so services can hold `Arc<dyn ToyStore>`
//! and stay agnostic of the backend.

use async_trait::async_trait;
use uuid::Uuid;

use toybox_core::result::AppResult;
use toybox_entity::toy::{Message, Toy, ToyFilter, ToyPatch};
use toybox_entity::user::{UpdateUser, User};

/// Persistence for toys and their embedded messages.
///
/// Implementations serialize conflicting writes per record; two concurrent
/// updates of the same toy are last-write-wins.
#[async_trait]
pub trait ToyStore: Send + Sync + 'static {
    /// All toys matching the filter predicate, in insertion order.
    ///
    /// Sorting and pagination are the caller's job; `sort_by` and
    /// `sort_dir` are ignored here.
    async fn find_many(&self, filter: &ToyFilter) -> AppResult<Vec<Toy>>;

    /// A single toy by id.
    async fn find_one(&self, id: Uuid) -> AppResult<Option<Toy>>;

    /// Insert a new toy. Fails with a conflict if the id is taken.
    async fn insert(&self, toy: &Toy) -> AppResult<()>;

    /// Merge the provided fields over the stored record in one write.
    ///
    /// Returns the updated record, or `None` if no toy has that id.
    async fn update_fields(&self, patch: &ToyPatch) -> AppResult<Option<Toy>>;

    /// Delete a toy, returning how many records were removed.
    async fn delete_one(&self, id: Uuid) -> AppResult<u64>;

    /// Append a message to a toy's thread. Returns `false` if the toy is absent.
    async fn push_message(&self, toy_id: Uuid, message: &Message) -> AppResult<bool>;

    /// Remove a message from a toy's thread. Returns `false` if the toy is
    /// absent; a missing message on an existing toy is not an error.
    async fn pull_message(&self, toy_id: Uuid, message_id: Uuid) -> AppResult<bool>;
}

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// All users, oldest first.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// A user by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// A user by username, compared case-insensitively.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with a conflict if the username is taken.
    async fn insert(&self, user: &User) -> AppResult<()>;

    /// Update profile fields, returning the new record or `None` if absent.
    async fn update(&self, data: &UpdateUser) -> AppResult<Option<User>>;

    /// Delete a user. Returns `true` if a record was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
