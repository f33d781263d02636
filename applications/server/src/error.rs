/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use profiler_core::ProfilerError;
use profiler_importer::ImportError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Profiler(#[from] ProfilerError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<profiler_storage::StorageError> for ServerError {
    fn from(err: profiler_storage::StorageError) -> Self {
        ServerError::Profiler(err.into())
    }
}

fn profiler_error_response(err: &ProfilerError) -> (StatusCode, String) {
    match err {
        ProfilerError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        ProfilerError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        ProfilerError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        ProfilerError::Parse(msg) => {
            tracing::error!("Parse error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing CSV".to_string(),
            )
        }
        ProfilerError::Store(msg) => {
            tracing::error!("Store error: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, "Store error".to_string())
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Profiler(ref e) => profiler_error_response(e),
            ServerError::Import(ImportError::Storage(ref e)) => profiler_error_response(e),
            ServerError::Import(ref e) => {
                tracing::error!("CSV import error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error processing CSV".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
