/// CSV bulk upload route
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use profiler_core::Profile;
use profiler_importer::RawRow;
use serde::Serialize;

/// Multipart field carrying the CSV payload
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub students: Vec<Profile>,
    pub rejected: Vec<RawRow>,
}

/// POST /students/upload
pub async fn upload_csv(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    let boundary = multer::parse_boundary(content_type)
        .map_err(|_| ServerError::BadRequest("Expected multipart/form-data".to_string()))?;

    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut file_data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        file_data = Some(
            field
                .bytes()
                .await
                .map_err(|e| ServerError::BadRequest(format!("Failed to read file: {}", e)))?,
        );
    }

    let file_data =
        file_data.ok_or_else(|| ServerError::BadRequest("No file uploaded".to_string()))?;

    let summary = app_state.importer.import_bytes(&file_data).await?;

    Ok(Json(UploadResponse {
        message: "CSV uploaded successfully".to_string(),
        students: summary.accepted,
        rejected: summary.rejected,
    }))
}
