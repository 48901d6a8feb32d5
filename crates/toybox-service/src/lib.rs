//! # toybox-service
//!
//! Business logic service layer for Toybox. Each service orchestrates the
//! record stores and credential primitives to implement application-level
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod toy;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use toy::{PAGE_SIZE, ToyPage, ToyService, ToyStats};
pub use user::UserService;
