//! Convenience result type alias for St-Barnabe.

use crate::error::AppError;

/// A specialized `Result` type for St-Barnabe operations.
pub type AppResult<T> = Result<T, AppError>;
