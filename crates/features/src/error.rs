//! Error types for the pluvio-features crate.

use chrono::NaiveDate;

/// Error type for feature building.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FeatureError {
    /// Internal invariant breach: a history feature would reference a date
    /// that is not strictly earlier than the row it belongs to. Cannot
    /// occur while the builder sorts before deriving; fatal if it does.
    #[error("causality violation: feature for {date} would reference {source_date}")]
    CausalityViolation {
        /// Date of the row being built.
        date: NaiveDate,
        /// Offending source date.
        source_date: NaiveDate,
    },
}

/// Error type for the chronological train/test split.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SplitError {
    /// Returned when the test fraction is outside the open interval (0, 1).
    #[error("test fraction must be in (0, 1), got {fraction}")]
    InvalidFraction {
        /// The invalid fraction.
        fraction: f64,
    },

    /// Returned when either partition would be empty.
    #[error("cannot split {n_rows} row(s) at index {split_index}: both partitions must be non-empty")]
    InsufficientData {
        /// Number of rows in the dataset.
        n_rows: usize,
        /// Computed split index.
        split_index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn causality_violation_display() {
        let e = FeatureError::CausalityViolation {
            date: NaiveDate::from_ymd_opt(2020, 5, 2).unwrap(),
            source_date: NaiveDate::from_ymd_opt(2020, 5, 3).unwrap(),
        };
        let msg = e.to_string();
        assert!(msg.contains("causality violation"));
        assert!(msg.contains("2020-05-02"));
        assert!(msg.contains("2020-05-03"));
    }

    #[test]
    fn invalid_fraction_display() {
        let e = SplitError::InvalidFraction { fraction: 1.5 };
        assert_eq!(e.to_string(), "test fraction must be in (0, 1), got 1.5");
    }

    #[test]
    fn insufficient_data_display() {
        let e = SplitError::InsufficientData {
            n_rows: 1,
            split_index: 0,
        };
        let msg = e.to_string();
        assert!(msg.contains("1 row(s)"));
        assert!(msg.contains("index 0"));
    }

    #[test]
    fn errors_are_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<FeatureError>();
        assert_impl::<SplitError>();
    }
}
