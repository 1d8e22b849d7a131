//! Error types for the pluvio-model crate.

/// Error type for model misuse and training failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// Returned when `fit` is called with zero rows.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Returned when the feature and target lengths differ.
    #[error("feature rows {features} do not match target length {targets}")]
    TargetLength {
        /// Number of feature rows.
        features: usize,
        /// Number of target values.
        targets: usize,
    },

    /// Returned when the feature column count differs from the fitted
    /// feature set, or from a prior fit, or when rows are ragged.
    #[error("expected {expected} feature column(s), got {got}")]
    FeatureMismatch {
        /// Expected column count.
        expected: usize,
        /// Observed column count.
        got: usize,
    },

    /// Returned when `predict` is called before a successful `fit`.
    #[error("model has not been fitted")]
    Unfitted,

    /// Returned when the underlying algorithm fails to train or predict.
    #[error("training failed: {reason}")]
    Training {
        /// Failure description from the algorithm.
        reason: String,
    },
}
