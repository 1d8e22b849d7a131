//! Error types for the pluvio-ingest crate.

use chrono::NaiveDate;

/// Errors that can occur while acquiring records.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Transport-level failure (connection, timeout, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The archive answered with a non-success status.
    #[error("request failed with status {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// The response body could not be interpreted as daily records.
    #[error("malformed response: {reason}")]
    MalformedResponse {
        /// Failure description.
        reason: String,
    },

    /// The requested period ends before it starts.
    #[error("invalid date range: {start} to {end}")]
    InvalidRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Latitude or longitude outside the valid range.
    #[error("coordinates out of range: ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Configured latitude.
        latitude: f64,
        /// Configured longitude.
        longitude: f64,
    },

    /// Sub-range length must be at least one day.
    #[error("chunk_days must be >= 1, got {chunk_days}")]
    InvalidChunk {
        /// The invalid chunk length.
        chunk_days: u32,
    },
}
