//! Research opportunity queries

use scholar_core::{
    error::Result,
    types::{CreateOpportunity, Opportunity, OpportunityId, Role, UserId},
    ScholarError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn from_row(row: &SqliteRow) -> Result<Opportunity> {
    let created_at: i64 = row.try_get("created_at")?;
    let created_at = chrono::DateTime::from_timestamp(created_at, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    Ok(Opportunity {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        academic_id: row.try_get("academic_id")?,
        created_at,
    })
}

/// Insert an opportunity owned by `academic_id`
///
/// The owner must exist and hold the academic role at this moment. The role
/// check is part of the insert statement, so it takes the write lock up front.
pub async fn create(pool: &SqlitePool, opportunity: CreateOpportunity) -> Result<Opportunity> {
    let result = sqlx::query(
        "INSERT INTO opportunities (title, description, academic_id)
         SELECT ?, ?, id FROM users WHERE id = ? AND role = ?",
    )
    .bind(&opportunity.title)
    .bind(&opportunity.description)
    .bind(opportunity.academic_id)
    .bind(Role::Academic)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ScholarError::InvalidReference(opportunity.academic_id));
    }

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| ScholarError::storage("Failed to retrieve created opportunity"))
}

pub async fn get_by_id(pool: &SqlitePool, id: OpportunityId) -> Result<Option<Opportunity>> {
    let row = sqlx::query(
        "SELECT id, title, description, academic_id, created_at
         FROM opportunities
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Get all opportunities in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Opportunity>> {
    let rows = sqlx::query(
        "SELECT id, title, description, academic_id, created_at
         FROM opportunities
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Get the opportunities owned by one academic
pub async fn get_by_academic(pool: &SqlitePool, academic_id: UserId) -> Result<Vec<Opportunity>> {
    let rows = sqlx::query(
        "SELECT id, title, description, academic_id, created_at
         FROM opportunities
         WHERE academic_id = ?
         ORDER BY id",
    )
    .bind(academic_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}
