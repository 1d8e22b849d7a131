//! Chronological train/test partitioning.

use crate::dataset::Dataset;
use crate::error::SplitError;

/// Splits a dataset into chronological train and test partitions.
///
/// No shuffling: the split index is `floor(N * (1 - test_fraction))`, the
/// train partition is rows `[0, index)` and the test partition is rows
/// `[index, N)`, so the test period always lies strictly after the train
/// period in time. The dataset is consumed; together the partitions hold
/// exactly the input rows in their original order.
///
/// # Errors
///
/// Returns [`SplitError::InvalidFraction`] unless `0 < test_fraction < 1`,
/// and [`SplitError::InsufficientData`] if either partition would be empty.
pub fn split(dataset: Dataset, test_fraction: f64) -> Result<(Dataset, Dataset), SplitError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(SplitError::InvalidFraction {
            fraction: test_fraction,
        });
    }

    let n_rows = dataset.len();
    let split_index = (n_rows as f64 * (1.0 - test_fraction)).floor() as usize;
    if split_index == 0 || split_index >= n_rows {
        return Err(SplitError::InsufficientData {
            n_rows,
            split_index,
        });
    }

    let mut train_rows = dataset.into_rows();
    let test_rows = train_rows.split_off(split_index);
    Ok((Dataset::from_rows(train_rows), Dataset::from_rows(test_rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use chrono::{Days, NaiveDate};
    use pluvio_record::RawRecord;

    /// Builds a dataset with exactly `n` valid rows.
    fn dataset(n: usize) -> Dataset {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let records: Vec<RawRecord> = (0..n + 7)
            .map(|i| {
                RawRecord::new(
                    start.checked_add_days(Days::new(i as u64)).unwrap(),
                    8.0,
                    2.0,
                    i as f64,
                    15.0,
                )
                .unwrap()
            })
            .collect();
        let ds = build(records).unwrap();
        assert_eq!(ds.len(), n);
        ds
    }

    #[test]
    fn eighty_twenty() {
        let (train, test) = split(dataset(10), 0.2).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        assert!(train.dates().last().unwrap() < test.dates().first().unwrap());
    }

    #[test]
    fn partitions_cover_input_in_order() {
        let ds = dataset(9);
        let all_dates = ds.dates();
        let (train, test) = split(ds, 0.25).unwrap();

        // floor(9 * 0.75) = 6
        assert_eq!(train.len(), 6);
        assert_eq!(test.len(), 3);

        let mut rejoined = train.dates();
        rejoined.extend(test.dates());
        assert_eq!(rejoined, all_dates);
    }

    #[test]
    fn zero_fraction_rejected() {
        let result = split(dataset(10), 0.0);
        assert!(matches!(
            result,
            Err(SplitError::InvalidFraction { fraction }) if fraction == 0.0
        ));
    }

    #[test]
    fn full_fraction_rejected() {
        let result = split(dataset(10), 1.0);
        assert!(matches!(result, Err(SplitError::InvalidFraction { .. })));
    }

    #[test]
    fn nan_fraction_rejected() {
        let result = split(dataset(10), f64::NAN);
        assert!(matches!(result, Err(SplitError::InvalidFraction { .. })));
    }

    #[test]
    fn single_row_rejected() {
        let result = split(dataset(1), 0.2);
        assert!(matches!(
            result,
            Err(SplitError::InsufficientData {
                n_rows: 1,
                split_index: 0,
            })
        ));
    }

    #[test]
    fn empty_dataset_rejected() {
        let result = split(Dataset::from_rows(Vec::new()), 0.2);
        assert!(matches!(result, Err(SplitError::InsufficientData { .. })));
    }
}
