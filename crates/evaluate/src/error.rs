//! Error types for the pluvio-evaluate crate.

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// Actual and predicted sequences have different lengths.
    #[error("length mismatch: {actual} actual value(s) vs {predicted} prediction(s)")]
    LengthMismatch {
        /// Length of the actual sequence.
        actual: usize,
        /// Length of the predicted sequence.
        predicted: usize,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Failure description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_display() {
        let e = EvaluateError::LengthMismatch {
            actual: 5,
            predicted: 4,
        };
        assert_eq!(
            e.to_string(),
            "length mismatch: 5 actual value(s) vs 4 prediction(s)"
        );
    }

    #[test]
    fn serialization_display() {
        let e = EvaluateError::Serialization {
            reason: "invalid JSON".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("invalid JSON"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EvaluateError>();
    }
}
