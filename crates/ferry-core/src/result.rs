//! Convenience result type alias for Ferry.

use crate::error::AppError;

/// A specialized `Result` type for Ferry operations.
pub type AppResult<T> = Result<T, AppError>;
