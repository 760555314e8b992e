//! Match results

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// A student/opportunity pairing whose similarity cleared the threshold.
///
/// Computed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub student_id: UserId,
    pub student_name: String,
    pub interests: String,
    pub opportunity_title: String,
    pub opportunity_description: String,
    /// Similarity in 0..=100
    pub match_score: u8,
}
