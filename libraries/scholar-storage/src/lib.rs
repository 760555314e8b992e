//! Scholar Match Storage
//!
//! `SQLite` data store for users and research opportunities.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each table owns its own queries (`users`, `opportunities`)
//! - **Append-Only**: Records are created and listed, never updated or deleted
//! - **Insertion Order**: Every listing is ordered by id
//!
//! # Example
//!
//! ```rust,no_run
//! use scholar_storage::{LocalStorage, create_pool, run_migrations};
//! use scholar_core::{CreateUser, Role, Storage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://scholar.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorage::new(pool);
//! storage
//!     .create_user(CreateUser::new("Ada", "ada@uni.edu", Role::Academic))
//!     .await?;
//! let users = storage.get_all_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod opportunities;
pub mod users;

pub use context::LocalStorage;
pub use error::StorageError;

// Alias used by the server
pub type Database = LocalStorage;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at startup; creates the `users` and `opportunities` tables.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://scholar.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
