/// Storage setup errors
use thiserror::Error;

/// Errors raised while opening the store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
