/// Core error types for Scholar Match
use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `ScholarError`
pub type Result<T> = std::result::Result<T, ScholarError>;

/// Core error type for Scholar Match
#[derive(Error, Debug)]
pub enum ScholarError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Opportunity references a user that is missing or not an academic
    #[error("Invalid academic user: {0}")]
    InvalidReference(UserId),

    /// Duplicate entry (unique constraint)
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl ScholarError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ScholarError {
    fn from(err: sqlx::Error) -> Self {
        // UNIQUE(email) is the only unique constraint in the schema
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::Duplicate(db_err.message().to_string());
            }
        }
        Self::Database(err.to_string())
    }
}
