//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use profiler_core::{NewUser, StorageContext};
use profiler_server::{
    config::ServerSettings, create_router, services::AuthService, state::AppState,
};
use profiler_storage::{KvStorageContext, MemoryStore};
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret-key";

/// Router over an in-memory store, plus handles to seed and inspect it
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<dyn StorageContext>,
    pub auth_service: Arc<AuthService>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_limit(1024 * 1024)
}

pub fn create_test_app_with_limit(max_upload_bytes: usize) -> TestApp {
    let storage: Arc<dyn StorageContext> =
        Arc::new(KvStorageContext::new(Arc::new(MemoryStore::new())));
    let auth_service = Arc::new(AuthService::new(TEST_SECRET.to_string(), 1));

    let settings = ServerSettings {
        host: "127.0.0.1".to_string(),
        port: 5000,
        max_upload_bytes,
    };
    let app_state = AppState::new(Arc::clone(&storage), Arc::clone(&auth_service));

    TestApp {
        router: create_router(app_state, &settings),
        storage,
        auth_service,
    }
}

impl TestApp {
    /// Store a user with a real bcrypt hash
    pub async fn seed_user(&self, username: &str, password: &str, role: &str) {
        let password_hash = self.auth_service.hash_password(password).unwrap();
        self.storage
            .create_user(NewUser {
                username: username.to_string(),
                password_hash,
                role: role.to_string(),
            })
            .await
            .unwrap();
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub const BOUNDARY: &str = "X-PROFILER-BOUNDARY";

/// multipart/form-data request with one file field
pub fn multipart_request(uri: &str, field_name: &str, csv: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field_name}\"; filename=\"students.csv\"\r\n\
         Content-Type: text/csv\r\n\
         \r\n\
         {csv}\r\n\
         --{BOUNDARY}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

pub fn full_profile(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "gender": "F",
        "age": 30,
        "address": "12 Rizal St",
        "occupation": "Teacher",
        "religion": "Catholic",
        "status": "Single"
    })
}
