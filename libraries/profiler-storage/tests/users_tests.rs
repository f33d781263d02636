use profiler_core::{KeyValueStore, NewUser, ProfilerError, StorageContext};

use test_helpers::setup_test_storage;

fn new_user(username: &str, role: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: format!("hash-of-{username}"),
        role: role.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_get_credentials() {
    let (storage, store) = setup_test_storage();

    let user = storage.create_user(new_user("admin", "admin")).await.unwrap();
    assert_eq!(user.username, "admin");

    let (found, hash) = storage
        .get_user_credentials("admin")
        .await
        .unwrap()
        .expect("user exists");
    assert_eq!(found, user);
    assert_eq!(hash, "hash-of-admin");

    let raw = store.hash_get_all("user:admin").await.unwrap();
    assert_eq!(raw.get("role").map(String::as_str), Some("admin"));
    assert_eq!(raw.get("password").map(String::as_str), Some("hash-of-admin"));
}

#[tokio::test]
async fn test_unknown_user_has_no_credentials() {
    let (storage, _) = setup_test_storage();
    assert!(storage.get_user_credentials("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let (storage, _) = setup_test_storage();

    storage.create_user(new_user("clerk", "staff")).await.unwrap();
    let result = storage.create_user(new_user("clerk", "admin")).await;
    assert!(matches!(result, Err(ProfilerError::Conflict(_))));
}

#[tokio::test]
async fn test_blank_username_is_validation_error() {
    let (storage, _) = setup_test_storage();

    let result = storage.create_user(new_user("  ", "staff")).await;
    assert!(matches!(result, Err(ProfilerError::Validation(_))));
}

#[tokio::test]
async fn test_get_all_users_sorted() {
    let (storage, _) = setup_test_storage();

    storage.create_user(new_user("zoe", "staff")).await.unwrap();
    storage.create_user(new_user("adam", "admin")).await.unwrap();

    let names: Vec<String> = storage
        .get_all_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, vec!["adam", "zoe"]);
}
