//! CSV payload parsing
//!
//! The first row is the header. Header names are trimmed; cell values are
//! kept verbatim. Blank lines are skipped. A row whose column count differs
//! from the header's is still returned, keyed by the headers it reaches and
//! flagged as not well formed. Whether a row is usable is the caller's call;
//! only a payload without a usable header fails here.

use crate::{CsvRow, ImportError, ParsedCsv, RawRow, Result};
use std::collections::HashSet;

/// Column that keys every row
pub const ID_COLUMN: &str = "id";

/// Parse a CSV payload into header-keyed rows
///
/// # Errors
///
/// `ImportError::Parse` when the header row is missing or empty, or names a
/// column twice. `ImportError::Csv` on a CSV syntax error.
pub fn parse(raw: &str) -> Result<ParsedCsv> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(raw.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    validate_headers(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let cells: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();

        rows.push(CsvRow {
            line,
            cells,
            well_formed: record.len() == headers.len(),
        });
    }

    Ok(ParsedCsv { headers, rows })
}

fn validate_headers(headers: &[String]) -> Result<()> {
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ImportError::Parse("missing header row".to_string()));
    }

    let mut seen = HashSet::new();
    for header in headers {
        if !seen.insert(header.as_str()) {
            return Err(ImportError::Parse(format!("duplicate column '{header}'")));
        }
    }

    Ok(())
}
