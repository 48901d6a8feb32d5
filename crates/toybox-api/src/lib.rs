//! # toybox-api
//!
//! HTTP API layer for Toybox built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS),
//! cookie-based auth extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
