/// Research opportunities API routes
use crate::{api::MessageResponse, error::Result, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use scholar_core::{CreateOpportunity, Opportunity, OpportunityId, Storage, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateOpportunityRequest {
    pub title: String,
    pub description: String,
    pub academic_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityResponse {
    pub id: OpportunityId,
    pub title: String,
    pub description: String,
    pub academic_id: UserId,
}

impl From<Opportunity> for OpportunityResponse {
    fn from(opp: Opportunity) -> Self {
        Self {
            id: opp.id,
            title: opp.title,
            description: opp.description,
            academic_id: opp.academic_id,
        }
    }
}

/// POST /opportunities
/// Publish an opportunity; the owner must be an academic
pub async fn create_opportunity(
    State(app_state): State<AppState>,
    Json(req): Json<CreateOpportunityRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let academic_id = req.academic_id;

    let opportunity = app_state
        .db
        .create_opportunity(CreateOpportunity {
            title: req.title,
            description: req.description,
            academic_id,
        })
        .await
        .map_err(|e| {
            tracing::warn!(academic_id, "Opportunity rejected: {}", e);
            e
        })?;

    tracing::info!(
        opportunity_id = opportunity.id,
        academic_id,
        "Opportunity created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Opportunity created successfully")),
    ))
}

/// GET /opportunities
/// List all opportunities in creation order
pub async fn list_opportunities(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<OpportunityResponse>>> {
    let opportunities = app_state.db.get_all_opportunities().await?;
    Ok(Json(
        opportunities
            .into_iter()
            .map(OpportunityResponse::from)
            .collect(),
    ))
}
