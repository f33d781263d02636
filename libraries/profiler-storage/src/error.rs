/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Connection could not be established
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error reported by Redis
    #[error(transparent)]
    Redis(#[from] redis::RedisError),
}

impl From<StorageError> for profiler_core::ProfilerError {
    fn from(err: StorageError) -> Self {
        profiler_core::ProfilerError::store(err.to_string())
    }
}
