//! Convenience result type alias for Banca.

use crate::error::AppError;

/// A specialized `Result` type for Banca operations.
pub type AppResult<T> = Result<T, AppError>;
