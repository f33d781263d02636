//! Error types for the importer

use profiler_core::ProfilerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] ProfilerError),
}

impl ImportError {
    /// True when the payload itself could not be parsed
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Csv(_))
    }
}

impl From<ImportError> for ProfilerError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Storage(inner) => inner,
            ImportError::Io(e) => ProfilerError::store(e.to_string()),
            other => ProfilerError::parse(other.to_string()),
        }
    }
}
