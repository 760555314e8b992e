/// Users API routes
use crate::{api::MessageResponse, error::Result, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use scholar_core::{CreateUser, Role, Storage, User, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub interests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// POST /users
/// Register a student or academic
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let user = app_state
        .db
        .create_user(CreateUser {
            name: req.name,
            email: req.email,
            role: req.role,
            interests: req.interests,
        })
        .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// GET /users
/// List all users in creation order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = app_state.db.get_all_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
