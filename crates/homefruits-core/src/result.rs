//! Convenience result type alias for HomeFruits.

use crate::error::AppError;

/// A specialized `Result` type for HomeFruits operations.
pub type AppResult<T> = Result<T, AppError>;
