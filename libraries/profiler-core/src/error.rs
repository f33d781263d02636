/// Core error types for the profiling system
use thiserror::Error;

/// Result type alias using `ProfilerError`
pub type Result<T> = std::result::Result<T, ProfilerError>;

/// Core error type shared by every crate in the workspace
#[derive(Error, Debug)]
pub enum ProfilerError {
    /// Missing or empty required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Malformed bulk payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// Underlying key-value store unreachable or write failure
    #[error("Store error: {0}")]
    Store(String),

    /// Entity already exists
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl ProfilerError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
