use thiserror::Error;

use crate::utils::AppError;

/// Top-level server errors (startup and serve loop)
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Startup error: {0}")]
    Startup(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        ServerError::Startup(err.to_string())
    }
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
