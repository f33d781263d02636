/// API route modules
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod profiles;
pub mod upload;

use serde::Serialize;

/// `{ "message": ... }` body shared by write endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
