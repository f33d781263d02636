//! Profiler Server Library
//!
//! HTTP backend for the resident profiling system: profile CRUD, CSV bulk
//! import, and token-based login.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ServerConfig, StorageBackend};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::auth::AuthService;
pub use state::AppState;
