//! Error types for Bookshelf

use thiserror::Error;

use crate::models::FieldErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Draft rejected by the add form rules. Shown inline, never fatal.
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

impl AppError {
    /// Field messages carried by a validation error
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
