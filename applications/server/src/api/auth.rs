/// Authentication API routes
use crate::{
    api::MessageResponse,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use profiler_core::NewUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

fn required(value: Option<String>) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest("All fields are required".to_string()))
}

/// POST /register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let username = required(req.username)?;
    let password = required(req.password)?;
    let role = required(req.role)?;

    let password_hash = app_state.auth_service.hash_password(&password)?;
    let user = app_state
        .storage
        .create_user(NewUser {
            username,
            password_hash,
            role,
        })
        .await?;

    tracing::info!("Registered user '{}' with role '{}'", user.username, user.role);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let invalid = || ServerError::Auth("Invalid username or password".to_string());

    let Some((user, password_hash)) = app_state
        .storage
        .get_user_credentials(&req.username)
        .await?
    else {
        tracing::warn!("Login rejected for unknown user '{}'", req.username);
        return Err(invalid());
    };

    if !app_state
        .auth_service
        .verify_password(&req.password, &password_hash)?
    {
        tracing::warn!("Login rejected for user '{}': wrong password", req.username);
        return Err(invalid());
    }

    let token = app_state.auth_service.create_token(&user)?;

    Ok(Json(LoginResponse {
        token,
        role: user.role,
    }))
}
