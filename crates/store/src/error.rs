//! Error types for the pluvio-store crate.

use std::path::PathBuf;

/// Error type for record file access.
///
/// Only file-level failures surface here; individual unparsable rows are
/// dropped with a logged diagnostic on the read path.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to open or create a record file.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write or flush a record file.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path of the file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}
