//! CSV extraction with strict header validation.
//!
//! RULE: The extractor never repairs data. Missing cells come out as
//! None and are the transformer's problem; a missing *column* is a
//! validation error naming everything that is absent.

use crate::{
    error::{EtlError, EtlResult},
    record::{RawLoanRow, REQUIRED_COLUMNS},
};
use std::path::Path;

/// Read the loan dataset at `path`.
///
/// Fails with `EtlError::Io` on an unreadable file and with
/// `EtlError::MissingColumns` when any required header is absent.
/// Column order does not matter; extra columns are ignored.
pub fn extract_data(path: &Path) -> EtlResult<Vec<RawLoanRow>> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|&col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(EtlError::MissingColumns { columns: missing });
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: RawLoanRow = row?;
        rows.push(row);
    }

    log::info!("extracted {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
