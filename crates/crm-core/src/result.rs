//! Convenience result type alias for Acme CRM.

use crate::error::AppError;

/// A specialized `Result` type for CRM operations.
pub type AppResult<T> = Result<T, AppError>;
