//! Process-local stores used for development and tests.
//!
//! Records are kept in insertion order behind a `tokio::sync::RwLock`;
//! every mutation takes the write lock for its whole read-modify-write.

pub mod toy;
pub mod user;

pub use toy::MemoryToyStore;
pub use user::MemoryUserStore;
