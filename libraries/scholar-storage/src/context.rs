use crate::{create_pool, error::StorageError, opportunities, run_migrations, users};
use async_trait::async_trait;
use scholar_core::{error::Result, storage::Storage, types::*};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::str::FromStr;

/// Local storage using `SQLite`
///
/// Cloning shares the underlying pool.
#[derive(Clone)]
pub struct LocalStorage {
    pool: SqlitePool,
}

impl LocalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `database_url` and apply migrations
    ///
    /// The parent directory of a file-backed database is created if missing.
    pub async fn connect(database_url: &str) -> std::result::Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?;
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Storage for LocalStorage {
    // Users
    async fn create_user(&self, user: CreateUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn get_users_by_role(&self, role: Role) -> Result<Vec<User>> {
        users::get_by_role(&self.pool, role).await
    }

    // Opportunities
    async fn create_opportunity(&self, opportunity: CreateOpportunity) -> Result<Opportunity> {
        opportunities::create(&self.pool, opportunity).await
    }

    async fn get_all_opportunities(&self) -> Result<Vec<Opportunity>> {
        opportunities::get_all(&self.pool).await
    }

    async fn get_opportunities_by_academic(&self, academic_id: UserId) -> Result<Vec<Opportunity>> {
        opportunities::get_by_academic(&self.pool, academic_id).await
    }
}
