/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scholar_core::ScholarError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Opportunity owner is missing or not an academic
    #[error("Invalid academic user")]
    InvalidAcademic,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(ScholarError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ScholarError> for ServerError {
    fn from(err: ScholarError) -> Self {
        match err {
            ScholarError::InvalidReference(_) => ServerError::InvalidAcademic,
            ScholarError::InvalidInput(msg) => ServerError::BadRequest(msg),
            ScholarError::Duplicate(msg) => ServerError::Conflict(msg),
            other => ServerError::Database(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::InvalidAcademic => {
                // Clients key off this exact shape
                let body = Json(json!({ "message": "Invalid academic user" }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_http_statuses() {
        let cases = [
            (ScholarError::InvalidReference(7), StatusCode::BAD_REQUEST),
            (ScholarError::invalid_input("name is required"), StatusCode::BAD_REQUEST),
            (ScholarError::Duplicate("users.email".to_string()), StatusCode::CONFLICT),
            (ScholarError::storage("pool closed"), StatusCode::INTERNAL_SERVER_ERROR),
            (ScholarError::Database("disk I/O error".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = ServerError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let response = ServerError::Internal("task panicked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
