//! Record file reading.

use std::fs::File;
use std::path::Path;

use pluvio_record::RawRecord;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::row::CsvRow;

/// Reads all records from a CSV file.
///
/// Rows with unparsable or missing required fields are dropped with a
/// logged diagnostic instead of failing the whole file. Calendar parts are
/// re-derived from the `date` column; the redundant columns are ignored.
///
/// # Errors
///
/// Returns [`StoreError::Open`] if the file cannot be opened.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                dropped += 1;
                warn!(path = %path.display(), line = line + 2, error = %e, "dropping unparsable row");
                continue;
            }
        };
        match RawRecord::new(
            row.date,
            row.temp_max,
            row.temp_min,
            row.precipitation,
            row.wind_max,
        ) {
            Ok(record) => records.push(record),
            Err(e) => {
                dropped += 1;
                warn!(path = %path.display(), line = line + 2, error = %e, "dropping invalid record");
            }
        }
    }

    info!(
        path = %path.display(),
        n_records = records.len(),
        dropped,
        "records read"
    );
    Ok(records)
}
