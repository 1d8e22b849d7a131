//! Feature table construction from raw daily records.

use chrono::NaiveDate;
use pluvio_record::{RawRecord, Season};
use tracing::{debug, warn};

use crate::dataset::{Dataset, FeatureRow};
use crate::error::FeatureError;
use crate::spec::PRECIP_FEATURES;

/// Builds the feature table from a concatenated sequence of raw records.
///
/// The input need not be sorted: records are sorted by date ascending
/// before any derived computation, duplicate dates beyond the first
/// occurrence are dropped with a diagnostic, and history features are
/// computed over the full sorted series. Rows whose history window cannot
/// be fully populated are excluded, so every row of the returned dataset
/// has all features present.
///
/// # Errors
///
/// Returns [`FeatureError::CausalityViolation`] if the sorted series is
/// not strictly ascending, an internal invariant breach that cannot
/// happen through this function's own sort-and-deduplicate path.
pub fn build(mut records: Vec<RawRecord>) -> Result<Dataset, FeatureError> {
    records.sort_by_key(RawRecord::date);

    let before = records.len();
    records.dedup_by_key(|r| r.date());
    let duplicates = before - records.len();
    if duplicates > 0 {
        warn!(duplicates, "dropped records with duplicate dates");
    }

    records.retain(|r| match Season::from_month(r.month()) {
        Some(_) => true,
        None => {
            warn!(date = %r.date(), month = r.month(), "rejected record with out-of-range month");
            false
        }
    });

    let dates: Vec<NaiveDate> = records.iter().map(RawRecord::date).collect();
    let precip: Vec<f64> = records.iter().map(RawRecord::precipitation).collect();

    // Every history feature below trusts strict ordering; verify it rather
    // than letting a broken sort silently leak future data into a window.
    for pair in dates.windows(2) {
        if pair[0] >= pair[1] {
            return Err(FeatureError::CausalityViolation {
                date: pair[1],
                source_date: pair[0],
            });
        }
    }

    let mut rows = Vec::with_capacity(records.len());
    let mut incomplete = 0usize;
    for (i, record) in records.iter().enumerate() {
        let season = Season::from_month(record.month()).expect("months validated above");

        let mut history = Vec::with_capacity(PRECIP_FEATURES.len());
        for feature in PRECIP_FEATURES {
            match feature.compute(&dates, &precip, i) {
                Some(value) => history.push(value),
                None => break,
            }
        }
        if history.len() < PRECIP_FEATURES.len() {
            incomplete += 1;
            continue;
        }

        rows.push(FeatureRow::new(*record, season, history));
    }

    debug!(
        n_input = before,
        n_rows = rows.len(),
        excluded = incomplete,
        "feature table built"
    );

    Ok(Dataset::from_rows(rows))
}
