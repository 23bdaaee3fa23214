//! Convenience result type alias for SignDesk.

use crate::error::AppError;

/// A specialized `Result` type for SignDesk operations.
pub type AppResult<T> = Result<T, AppError>;
