//! Error types for the catalog

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Classify a write-time failure: broken references and CHECK/NOT NULL
/// constraint failures are validation errors, anything else stays a database
/// fault.
pub(crate) fn constraint_violation(err: sqlx::Error) -> AppError {
    let detail = match &err {
        sqlx::Error::Database(db) => Some((db.kind(), db.message().to_string())),
        _ => None,
    };
    match detail {
        Some((ErrorKind::ForeignKeyViolation, _)) => {
            AppError::Validation("referenced record does not exist".to_string())
        }
        Some((ErrorKind::CheckViolation | ErrorKind::NotNullViolation, msg)) => {
            AppError::Validation(format!("constraint violated: {}", msg))
        }
        _ => AppError::Database(err),
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
