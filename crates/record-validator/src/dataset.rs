//! Historical Dataset Loading
//!
//! The marketing dataset ships as a tab-separated file with one row
//! per customer and the 29 headers matching `RawRecord`'s renames.

use crate::record::RawRecord;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors while loading the historical dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Read or deserialization failure from the csv reader
    #[error("failed to read dataset: {0}")]
    Read(#[from] csv::Error),
}

/// Load every row of a tab-separated dataset file.
///
/// Rows are returned as-is; filtering and validation happen in the
/// transformer so that batch and single-record semantics stay in one
/// place.
pub fn load_tsv(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path.as_ref())?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawRecord = row?;
        records.push(record);
    }

    info!(rows = records.len(), "loaded historical dataset");
    Ok(records)
}
