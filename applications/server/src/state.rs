/// Shared application state
use scholar_matcher::Matcher;
use scholar_storage::Database;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub matcher: Arc<Matcher>,
}

impl AppState {
    pub fn new(db: Arc<Database>, matcher: Arc<Matcher>) -> Self {
        Self { db, matcher }
    }
}
