//! Error types for the pluvio-record crate.

/// Error type for record construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    /// Returned when a required numeric field is NaN or infinite.
    #[error("non-finite value in {field}: {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The non-finite value.
        value: f64,
    },
}
