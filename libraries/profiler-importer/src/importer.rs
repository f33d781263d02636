//! Import orchestration - parses a payload and applies accepted rows to storage

use crate::{parser, CsvRow, ImportError, ImportSummary, Result};
use profiler_core::{ProfileFields, ProfileId, StorageContext, PROFILE_FIELDS};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Bulk profile importer
pub struct ProfileImporter {
    storage: Arc<dyn StorageContext>,
}

impl ProfileImporter {
    /// Create a new importer writing into `storage`
    pub fn new(storage: Arc<dyn StorageContext>) -> Self {
        Self { storage }
    }

    /// Import a CSV payload
    ///
    /// A row is accepted when it has a non-empty `id` and at least one
    /// profile column; every other row is reported as rejected. Rows shorter
    /// or longer than the header keep the cells that line up with it.
    /// Accepted rows are written in payload order, each overwriting the
    /// fields it carries. Columns that are not profile fields are not stored.
    ///
    /// # Errors
    ///
    /// Fails without partial results if the payload cannot be parsed. A
    /// storage failure aborts the import; rows written before it stay written.
    pub async fn import(&self, raw: &str) -> Result<ImportSummary> {
        let start_time = Instant::now();
        let parsed = parser::parse(raw)?;

        let ignored: Vec<&str> = parsed
            .headers
            .iter()
            .map(String::as_str)
            .filter(|h| *h != parser::ID_COLUMN && !PROFILE_FIELDS.contains(h))
            .collect();
        if !ignored.is_empty() {
            tracing::warn!("Ignoring unknown CSV columns: {}", ignored.join(", "));
        }

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for row in parsed.rows {
            if !row.well_formed {
                tracing::debug!(
                    "CSV row at line {} has {} of {} columns",
                    row.line,
                    row.cells.len(),
                    parsed.headers.len()
                );
            }

            let Some(id) = row.id().and_then(|id| ProfileId::parse(id).ok()) else {
                tracing::debug!("Rejecting CSV row at line {}: no id", row.line);
                rejected.push(row.cells);
                continue;
            };

            let fields = Self::profile_fields(&row);
            if fields.is_empty() {
                tracing::debug!("Rejecting CSV row at line {}: no profile fields", row.line);
                rejected.push(row.cells);
                continue;
            }

            let profile = self.storage.put_profile_fields(id, fields).await?;
            accepted.push(profile);
        }

        let elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::info!(
            "Imported {} profiles ({} rows rejected) in {}ms",
            accepted.len(),
            rejected.len(),
            elapsed_ms
        );

        Ok(ImportSummary {
            accepted,
            rejected,
            elapsed_ms,
        })
    }

    /// Import a payload that arrived as raw bytes
    pub async fn import_bytes(&self, bytes: &[u8]) -> Result<ImportSummary> {
        let raw = std::str::from_utf8(bytes)
            .map_err(|e| ImportError::Parse(format!("payload is not valid UTF-8: {e}")))?;
        self.import(raw).await
    }

    /// Import a CSV file from disk
    pub async fn import_file(&self, path: &Path) -> Result<ImportSummary> {
        let bytes = tokio::fs::read(path).await?;
        self.import_bytes(&bytes).await
    }

    fn profile_fields(row: &CsvRow) -> ProfileFields {
        row.cells
            .iter()
            .filter(|(header, _)| PROFILE_FIELDS.contains(&header.as_str()))
            .map(|(header, value)| (header.as_str(), value.as_str()))
            .collect()
    }
}
