#![allow(dead_code)]

use scholar_core::{CreateOpportunity, CreateUser, Role, Storage, User, UserId};
use scholar_storage::LocalStorage;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// File-backed test store; the directory is removed on drop
pub struct TestStore {
    pub storage: LocalStorage,
    _temp_dir: TempDir,
}

pub async fn setup_test_store() -> TestStore {
    // Initialize logging once
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("match.db").display());

    let storage = LocalStorage::connect(&db_url)
        .await
        .expect("Failed to create test database");

    TestStore {
        storage,
        _temp_dir: temp_dir,
    }
}

pub async fn add_academic(storage: &LocalStorage, name: &str) -> User {
    storage
        .create_user(CreateUser::new(
            name,
            format!("{}@faculty.edu", name.to_lowercase()),
            Role::Academic,
        ))
        .await
        .unwrap()
}

pub async fn add_student(storage: &LocalStorage, name: &str, interests: Option<&str>) -> User {
    let mut user = CreateUser::new(
        name,
        format!("{}@students.edu", name.to_lowercase()),
        Role::Student,
    );
    user.interests = interests.map(str::to_string);
    storage.create_user(user).await.unwrap()
}

pub async fn add_opportunity(
    storage: &LocalStorage,
    title: &str,
    description: &str,
    academic_id: UserId,
) {
    storage
        .create_opportunity(CreateOpportunity {
            title: title.to_string(),
            description: description.to_string(),
            academic_id,
        })
        .await
        .unwrap();
}
