/// Matching API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use scholar_core::{Match, Storage};
use std::sync::Arc;

/// GET /match/fuzzy
/// Students whose interests resemble an opportunity description
///
/// Ordered by student, then opportunity, in creation order. Not ranked.
pub async fn fuzzy_match(State(app_state): State<AppState>) -> Result<Json<Vec<Match>>> {
    let students = app_state.db.get_students().await?;
    let opportunities = app_state.db.get_all_opportunities().await?;

    // Scoring is CPU-bound and scales with description length
    let matcher = Arc::clone(&app_state.matcher);
    let report = tokio::task::spawn_blocking(move || {
        matcher.find_matches(&students, &opportunities)
    })
    .await
    .map_err(|e| ServerError::Internal(format!("Match task failed: {}", e)))?;

    tracing::info!(
        pairs = report.pairs_evaluated,
        matches = report.matches.len(),
        "Fuzzy match served"
    );

    Ok(Json(report.matches))
}
