//! User queries

use scholar_core::{
    error::Result,
    types::{CreateUser, Role, User, UserId},
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const USER_COLUMNS: &str = "id, name, email, role, interests, created_at";

fn from_row(row: &SqliteRow) -> Result<User> {
    let created_at: i64 = row.try_get("created_at")?;
    let created_at = chrono::DateTime::from_timestamp(created_at, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: row.try_get::<Role, _>("role")?,
        interests: row.try_get("interests")?,
        created_at,
    })
}

/// Insert a user and return the stored record
///
/// Fails with `InvalidInput` on a missing name/email and `Duplicate` when
/// the email is taken.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    user.validate()?;

    let result = sqlx::query("INSERT INTO users (name, email, role, interests) VALUES (?, ?, ?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role)
        .bind(&user.interests)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id).await?.ok_or_else(|| {
        scholar_core::ScholarError::storage("Failed to retrieve created user")
    })
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Get all users in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

/// Get all users with the given role in insertion order
pub async fn get_by_role(pool: &SqlitePool, role: Role) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE role = ? ORDER BY id"
    ))
    .bind(role)
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}
