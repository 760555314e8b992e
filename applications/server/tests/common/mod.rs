//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use scholar_matcher::Matcher;
use scholar_server::{create_router, state::AppState};
use scholar_storage::Database;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router backed by a fresh file database; keep the `TempDir` alive for the
/// duration of the test
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    _temp_dir: TempDir,
}

/// Create a test database with migrations applied
pub async fn create_test_database() -> Result<(Arc<Database>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_url = format!("sqlite://{}", temp_dir.path().join("scholar.db").display());
    let db = Database::connect(&db_url).await?;
    Ok((Arc::new(db), temp_dir))
}

pub async fn create_test_app() -> TestApp {
    let (db, temp_dir) = create_test_database().await.unwrap();
    let app_state = AppState::new(Arc::clone(&db), Arc::new(Matcher::new()));

    TestApp {
        router: create_router(app_state),
        db,
        _temp_dir: temp_dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> StatusCode {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap().status()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }
}

/// Test request bodies
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn academic(name: &str, email: &str) -> Value {
        json!({ "name": name, "email": email, "role": "academic" })
    }

    pub fn student(name: &str, email: &str, interests: Option<&str>) -> Value {
        match interests {
            Some(interests) => {
                json!({ "name": name, "email": email, "role": "student", "interests": interests })
            }
            None => json!({ "name": name, "email": email, "role": "student" }),
        }
    }

    pub fn opportunity(title: &str, description: &str, academic_id: i64) -> Value {
        json!({ "title": title, "description": description, "academic_id": academic_id })
    }
}
