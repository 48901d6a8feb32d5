//! # toybox-core
//!
//! Core crate for the Toybox catalog backend. Contains configuration
//! schemas, sorting/pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Toybox crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
