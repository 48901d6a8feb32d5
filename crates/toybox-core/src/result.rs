//! Convenience result type alias for Toybox.

use crate::error::AppError;

/// A specialized `Result` type for Toybox operations.
pub type AppResult<T> = Result<T, AppError>;
