/// Protected dashboard route
use crate::{api::MessageResponse, middleware::AuthenticatedUser};
use axum::Json;

/// GET /dashboard
pub async fn dashboard(user: AuthenticatedUser) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Welcome {}, Role: {}",
        user.username, user.role
    )))
}
