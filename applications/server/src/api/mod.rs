/// API route modules
pub mod health;
pub mod matching;
pub mod opportunities;
pub mod users;

use crate::state::AppState;
use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Body returned by successful create endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/opportunities",
            get(opportunities::list_opportunities).post(opportunities::create_opportunity),
        )
        .route("/match/fuzzy", get(matching::fuzzy_match))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
