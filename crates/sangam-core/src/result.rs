//! Application-wide result alias.

use crate::error::AppError;

/// Shorthand result type used throughout the application.
pub type AppResult<T> = Result<T, AppError>;
