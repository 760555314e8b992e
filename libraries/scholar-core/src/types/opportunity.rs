//! Research opportunity types

use serde::{Deserialize, Serialize};

use super::user::UserId;

pub type OpportunityId = i64;

/// A research opportunity owned by an academic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub title: String,
    pub description: String,
    /// Owning academic; checked at creation time only
    pub academic_id: UserId,
    pub created_at: String,
}

/// Data for creating a new opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOpportunity {
    pub title: String,
    pub description: String,
    pub academic_id: UserId,
}
