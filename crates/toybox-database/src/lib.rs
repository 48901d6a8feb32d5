//! # toybox-database
//!
//! Record store abstractions for toys and users, with a PostgreSQL
//! implementation (sqlx) and a process-local in-memory implementation.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::{MemoryToyStore, MemoryUserStore};
pub use repositories::{PgToyRepository, PgUserRepository};
pub use store::{ToyStore, UserStore};
