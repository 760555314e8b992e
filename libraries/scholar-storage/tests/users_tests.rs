
use scholar_core::{CreateUser, Role, ScholarError, Storage};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_user() {
    let db = TestDb::new().await;

    let user = db
        .storage()
        .create_user(
            CreateUser::new("Bea", "bea@students.edu", Role::Student).with_interests("robotics"),
        )
        .await
        .expect("Failed to create user");

    assert!(user.id > 0);
    assert_eq!(user.name, "Bea");
    assert_eq!(user.email, "bea@students.edu");
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.interests.as_deref(), Some("robotics"));
    assert!(!user.created_at.is_empty());

    let fetched = db.storage().get_user(user.id).await.unwrap();
    assert_eq!(fetched, Some(user));
}

#[tokio::test]
async fn test_get_nonexistent_user() {
    let db = TestDb::new().await;

    let user = db.storage().get_user(999).await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_users_listed_in_insertion_order() {
    let db = TestDb::new().await;

    create_test_student(db.storage(), "Zed", None).await;
    create_test_academic(db.storage(), "Ada").await;
    create_test_student(db.storage(), "Mia", Some("chemistry")).await;

    let users = db.storage().get_all_users().await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Ada", "Mia"]);

    // Reads are repeatable
    let again = db.storage().get_all_users().await.unwrap();
    assert_eq!(users, again);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let db = TestDb::new().await;

    db.storage()
        .create_user(CreateUser::new("Ada", "ada@uni.edu", Role::Academic))
        .await
        .unwrap();

    let result = db
        .storage()
        .create_user(CreateUser::new("Ada Two", "ada@uni.edu", Role::Student))
        .await;

    assert!(matches!(result, Err(ScholarError::Duplicate(_))));
    assert_eq!(db.storage().get_all_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let db = TestDb::new().await;

    let result = db
        .storage()
        .create_user(CreateUser::new("", "nobody@uni.edu", Role::Student))
        .await;
    assert!(matches!(result, Err(ScholarError::InvalidInput(_))));

    let result = db
        .storage()
        .create_user(CreateUser::new("Nobody", "", Role::Student))
        .await;
    assert!(matches!(result, Err(ScholarError::InvalidInput(_))));

    assert!(db.storage().get_all_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_users_by_role() {
    let db = TestDb::new().await;

    let a = create_test_student(db.storage(), "A", Some("x")).await;
    create_test_academic(db.storage(), "Prof").await;
    let b = create_test_student(db.storage(), "B", None).await;

    let students = db.storage().get_students().await.unwrap();
    assert_eq!(
        students.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![a.id, b.id]
    );

    let academics = db.storage().get_users_by_role(Role::Academic).await.unwrap();
    assert_eq!(academics.len(), 1);
    assert_eq!(academics[0].name, "Prof");
}
