/// API integration tests
/// Tests complete HTTP request/response cycles against the in-memory store
mod common;

use axum::http::{header, Request, StatusCode};
use common::{
    body_json, create_test_app, create_test_app_with_limit, empty_request, full_profile,
    json_request, multipart_request,
};
use profiler_core::{ProfileId, StorageContext};
use serde_json::json;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let response = app.router.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_and_get_profile() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/students", full_profile("1", "Alice")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["student"]["id"], "1");
    assert!(body["message"].is_string());

    let response = app
        .router
        .oneshot(empty_request("GET", "/students/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": "1",
            "name": "Alice",
            "gender": "F",
            "age": "30",
            "address": "12 Rizal St",
            "occupation": "Teacher",
            "religion": "Catholic",
            "status": "Single"
        })
    );
}

#[tokio::test]
async fn test_create_accepts_numeric_id() {
    let app = create_test_app();

    let mut profile = full_profile("ignored", "Alice");
    profile["id"] = json!(42);

    let response = app
        .router
        .oneshot(json_request("POST", "/students", profile))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = app
        .storage
        .get_profile(&ProfileId::parse("42").unwrap())
        .await
        .unwrap();
    assert_eq!(stored.fields.get("name"), Some("Alice"));
}

#[tokio::test]
async fn test_create_missing_field_is_bad_request() {
    let app = create_test_app();

    let mut profile = full_profile("1", "Alice");
    profile.as_object_mut().unwrap().remove("occupation");

    let response = app
        .router
        .oneshot(json_request("POST", "/students", profile))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "occupation is required");
    assert!(app.storage.list_profiles().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_missing_id_is_bad_request() {
    let app = create_test_app();

    let mut profile = full_profile("1", "Alice");
    profile.as_object_mut().unwrap().remove("id");

    let response = app
        .router
        .oneshot(json_request("POST", "/students", profile))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_reserved_id_is_bad_request() {
    let app = create_test_app();

    for reserved in ["stats", "upload"] {
        let response = app
            .router
            .clone()
            .oneshot(json_request("POST", "/students", full_profile(reserved, "Alice")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    assert!(app.storage.list_profiles().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_static_routes_take_precedence_over_ids() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(json_request("PUT", "/students/stats", json!({ "name": "Zed" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_blank_path_id() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/students/%20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .router
        .clone()
        .oneshot(json_request("PUT", "/students/%20", json!({ "name": "Zed" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .router
        .oneshot(empty_request("DELETE", "/students/%20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_missing_profile_is_not_found() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(empty_request("GET", "/students/nobody"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_list_profiles() {
    let app = create_test_app();

    for (id, name) in [("A", "Alice"), ("B", "Bob"), ("C", "Carol")] {
        let response = app
            .router
            .clone()
            .oneshot(json_request("POST", "/students", full_profile(id, name)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .router
        .oneshot(empty_request("GET", "/students"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let mut ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_search_profiles() {
    let app = create_test_app();

    for (id, name) in [("1", "Alice"), ("2", "Bob")] {
        app.router
            .clone()
            .oneshot(json_request("POST", "/students", full_profile(id, name)))
            .await
            .unwrap();
    }

    let response = app
        .router
        .oneshot(empty_request("GET", "/students?q=ALI"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Alice");
}

#[tokio::test]
async fn test_profile_stats() {
    let app = create_test_app();

    for (id, name) in [("1", "Alice"), ("2", "Bob")] {
        app.router
            .clone()
            .oneshot(json_request("POST", "/students", full_profile(id, name)))
            .await
            .unwrap();
    }

    let response = app
        .router
        .oneshot(empty_request("GET", "/students/stats"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["occupations"]["Teacher"], 2);
    assert_eq!(body["genders"]["F"], 2);
}

#[tokio::test]
async fn test_partial_update() {
    let app = create_test_app();

    app.router
        .clone()
        .oneshot(json_request("POST", "/students", full_profile("1", "Alice")))
        .await
        .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/students/1",
            json!({ "status": "Married" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["student"]["status"], "Married");
    assert_eq!(body["student"]["name"], "Alice");

    let stored = app
        .storage
        .get_profile(&ProfileId::parse("1").unwrap())
        .await
        .unwrap();
    assert_eq!(stored.fields.get("status"), Some("Married"));
    assert_eq!(stored.fields.get("occupation"), Some("Teacher"));
}

#[tokio::test]
async fn test_update_empty_body_is_bad_request() {
    let app = create_test_app();

    app.router
        .clone()
        .oneshot(json_request("POST", "/students", full_profile("1", "Alice")))
        .await
        .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(json_request("PUT", "/students/1", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .router
        .oneshot(empty_request("PUT", "/students/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_profile_is_not_found() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(json_request("PUT", "/students/9", json!({ "name": "Zed" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(app.storage.list_profiles().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = create_test_app();

    app.router
        .clone()
        .oneshot(json_request("POST", "/students", full_profile("1", "Alice")))
        .await
        .unwrap();

    for _ in 0..2 {
        let response = app
            .router
            .clone()
            .oneshot(empty_request("DELETE", "/students/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .router
        .oneshot(empty_request("GET", "/students/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_csv() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(multipart_request(
            "/students/upload",
            "file",
            "id,name\n1,Alice\n,Bob\n2,Carol",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "CSV uploaded successfully");
    assert_eq!(
        body["students"],
        json!([{ "id": "1", "name": "Alice" }, { "id": "2", "name": "Carol" }])
    );
    assert_eq!(body["rejected"], json!([{ "id": "", "name": "Bob" }]));

    let mut ids: Vec<String> = app
        .storage
        .list_profiles()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id.to_string())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_upload_without_file_field_is_bad_request() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(multipart_request("/students/upload", "other", "id,name\n1,Alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_upload_non_multipart_is_bad_request() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(json_request("POST", "/students/upload", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_malformed_csv_is_server_error() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(multipart_request(
            "/students/upload",
            "file",
            "id,name,name\n1,Alice,Al",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Error processing CSV");
    assert!(app.storage.list_profiles().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_without_id_column_rejects_rows() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(multipart_request("/students/upload", "file", "name,age\nAlice,30"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["students"], json!([]));
    assert_eq!(body["rejected"].as_array().map(Vec::len), Some(1));
    assert!(app.storage.list_profiles().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_keeps_ragged_rows() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(multipart_request(
            "/students/upload",
            "file",
            "id,name,age\n1,Alice\n2,Bob,40,extra",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["students"].as_array().map(Vec::len), Some(2));

    let alice = app
        .storage
        .get_profile(&ProfileId::parse("1").unwrap())
        .await
        .unwrap();
    assert_eq!(alice.fields.get("name"), Some("Alice"));
    assert_eq!(alice.fields.get("age"), None);
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let app = create_test_app_with_limit(64);

    let csv = format!("id,name\n{}", "1,Alice\n".repeat(32));
    let response = app
        .router
        .oneshot(multipart_request("/students/upload", "file", &csv))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_register_and_login_flow() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/register",
            json!({ "username": "clerk", "password": "pw123", "role": "staff" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/login",
            json!({ "username": "clerk", "password": "pw123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["role"], "staff");
    let token = body["token"].as_str().unwrap();

    let request = Request::builder()
        .uri("/dashboard")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Welcome clerk, Role: staff");
}

#[tokio::test]
async fn test_register_missing_field_is_bad_request() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/register",
            json!({ "username": "clerk", "password": "pw123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let app = create_test_app();
    app.seed_user("clerk", "pw123", "staff").await;

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/register",
            json!({ "username": "clerk", "password": "other", "role": "admin" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = create_test_app();
    app.seed_user("clerk", "correct", "staff").await;

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/login",
            json!({ "username": "clerk", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = create_test_app();

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/login",
            json!({ "username": "ghost", "password": "pw" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_requires_token() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/dashboard"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/dashboard")
        .header(header::AUTHORIZATION, "Bearer not-a-token")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
