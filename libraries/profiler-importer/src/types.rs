//! Common types for the importer

use profiler_core::Profile;
use serde::Serialize;
use std::collections::BTreeMap;

/// Header name to cell value, exactly as read from the payload
pub type RawRow = BTreeMap<String, String>;

/// One data row of a parsed CSV payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line number in the payload
    pub line: u64,

    /// Cells keyed by header
    pub cells: RawRow,

    /// False when the row's column count differs from the header's
    pub well_formed: bool,
}

impl CsvRow {
    /// The trimmed `id` cell, if present and non-empty
    pub fn id(&self) -> Option<&str> {
        self.cells
            .get("id")
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
    }
}

/// A parsed payload: trimmed headers plus data rows
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

/// Summary of an import operation
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    /// Records written, with the fields taken from their rows
    pub accepted: Vec<Profile>,

    /// Rows skipped, as read
    pub rejected: Vec<RawRow>,

    /// Wall time spent parsing and writing
    pub elapsed_ms: u64,
}

impl ImportSummary {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}
