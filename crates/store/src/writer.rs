//! Record file writing.

use std::fs::File;
use std::path::Path;

use pluvio_record::RawRecord;
use tracing::info;

use crate::error::StoreError;
use crate::row::CsvRow;

/// Writes records to a CSV file, header included, one row per record.
///
/// An existing file at `path` is replaced.
///
/// # Errors
///
/// Returns [`StoreError::Open`] if the file cannot be created and
/// [`StoreError::Write`] if serializing or flushing fails.
pub fn write_records(path: &Path, records: &[RawRecord]) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    for record in records {
        writer
            .serialize(CsvRow::from(record))
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }

    writer.flush().map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    info!(path = %path.display(), n_records = records.len(), "records written");
    Ok(())
}
