//! Result alias for handler and service code

use crate::utils::AppError;

/// Result carrying an [`AppError`] on failure; the return type of every
/// HTTP handler in [`crate::api`]
pub type AppResult<T> = Result<T, AppError>;
