//! Profiler Bulk Importer
//!
//! Turns an uploaded CSV payload into profile writes.
//!
//! # Features
//!
//! - Header-keyed CSV parsing with structural validation
//! - Row acceptance on a non-empty `id` column
//! - Sequential overwrite writes into the record store
//! - Accepted/rejected reporting
//!
//! # Architecture
//!
//! - `parser`: CSV text to header-keyed rows
//! - `importer`: Orchestration of the import process

mod error;
mod types;

pub mod importer;
pub mod parser;

pub use error::ImportError;
pub use importer::ProfileImporter;
pub use types::*;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
