//! PostgreSQL implementations of the record store traits.

pub mod toy;
pub mod user;

pub use toy::PgToyRepository;
pub use user::PgUserRepository;
