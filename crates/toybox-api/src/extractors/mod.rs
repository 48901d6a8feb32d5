//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod query;

pub use auth::{AdminUser, AuthUser};
pub use json::ValidJson;
pub use query::ToyQueryParams;
