/// Profile ("student") API routes
use crate::{api::MessageResponse, error::Result, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use profiler_core::{
    deserialize_text_or_number, CreateProfile, Profile, ProfileId, ProfileStats, ProfilerError,
    UpdateProfile,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub profile: CreateProfile,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub student: Profile,
}

/// Path segments under `/students` that shadow `/students/:id`
pub const RESERVED_IDS: [&str; 2] = ["stats", "upload"];

/// POST /students
pub async fn create_profile(
    State(app_state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>)> {
    let id = ProfileId::parse(req.id.unwrap_or_default())?;
    if RESERVED_IDS.contains(&id.as_str()) {
        return Err(ProfilerError::validation(format!("id '{id}' is reserved")).into());
    }
    let student = app_state.storage.create_profile(id, req.profile).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            message: "Profile saved successfully".to_string(),
            student,
        }),
    ))
}

/// Id from a `/students/:id` path; a blank segment names no record
fn path_id(raw: &str) -> Result<ProfileId> {
    ProfileId::parse(raw).map_err(|_| ProfilerError::not_found("Profile", raw).into())
}

/// GET /students/:id
pub async fn get_profile(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>> {
    let id = path_id(&id)?;
    let profile = app_state.storage.get_profile(&id).await?;
    Ok(Json(profile))
}

/// GET /students
///
/// With `?q=term`, only records whose id or any field contains `term`
/// (case-insensitive).
pub async fn list_profiles(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Profile>>> {
    let profiles = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => app_state.storage.search_profiles(q).await?,
        _ => app_state.storage.list_profiles().await?,
    };
    Ok(Json(profiles))
}

/// GET /students/stats
pub async fn profile_stats(State(app_state): State<AppState>) -> Result<Json<ProfileStats>> {
    let stats = app_state.storage.profile_stats().await?;
    Ok(Json(stats))
}

/// PUT /students/:id
///
/// A missing or unreadable body counts as an empty update.
pub async fn update_profile(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<UpdateProfile>>,
) -> Result<Json<ProfileResponse>> {
    let id = path_id(&id)?;
    let update = body.map(|Json(update)| update).unwrap_or_default();

    let student = app_state.storage.update_profile(&id, update).await?;

    Ok(Json(ProfileResponse {
        message: "Profile updated successfully".to_string(),
        student,
    }))
}

/// DELETE /students/:id
pub async fn delete_profile(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    if let Ok(id) = ProfileId::parse(&id) {
        app_state.storage.delete_profile(&id).await?;
    }

    Ok(Json(MessageResponse::new("Profile deleted successfully")))
}
