//! Model-ready feature rows and the immutable dataset container.

use chrono::NaiveDate;
use pluvio_record::{RawRecord, Season};

use crate::spec::{PrecipFeature, PRECIP_FEATURES};

/// Names of the base columns preceding the history features.
const BASE_NAMES: [&str; 9] = [
    "year",
    "month",
    "day",
    "temp_max",
    "temp_min",
    "temp_mean",
    "temp_diff",
    "weekday",
    "season",
];

/// Names of the interaction columns trailing the history features.
const INTERACTION_NAMES: [&str; 3] = [
    "temp_wind_interaction",
    "tempdiff_wind_interaction",
    "temp_weekday_interaction",
];

/// A raw record enriched with every derived feature, fully populated.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    record: RawRecord,
    temp_mean: f64,
    temp_diff: f64,
    season: Season,
    temp_wind_interaction: f64,
    tempdiff_wind_interaction: f64,
    temp_weekday_interaction: f64,
    /// History feature values, parallel to [`PRECIP_FEATURES`].
    precip_history: Vec<f64>,
}

impl FeatureRow {
    pub(crate) fn new(record: RawRecord, season: Season, precip_history: Vec<f64>) -> Self {
        debug_assert_eq!(precip_history.len(), PRECIP_FEATURES.len());
        let temp_mean = (record.temp_max() + record.temp_min()) / 2.0;
        let temp_diff = record.temp_max() - record.temp_min();
        Self {
            record,
            temp_mean,
            temp_diff,
            season,
            temp_wind_interaction: temp_mean * record.wind_max(),
            tempdiff_wind_interaction: temp_diff * record.wind_max(),
            temp_weekday_interaction: temp_mean * record.weekday() as f64,
            precip_history,
        }
    }

    /// Returns the underlying raw record.
    pub fn record(&self) -> &RawRecord {
        &self.record
    }

    /// Returns the observation date.
    pub fn date(&self) -> NaiveDate {
        self.record.date()
    }

    /// Returns the regression target: this day's precipitation.
    pub fn target(&self) -> f64 {
        self.record.precipitation()
    }

    /// Returns the mean of the daily temperature extremes.
    pub fn temp_mean(&self) -> f64 {
        self.temp_mean
    }

    /// Returns the daily temperature range.
    pub fn temp_diff(&self) -> f64 {
        self.temp_diff
    }

    /// Returns the season of the row's month.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Returns the value of a history feature, or `None` if the feature is
    /// not part of [`PRECIP_FEATURES`].
    pub fn precip_feature(&self, feature: PrecipFeature) -> Option<f64> {
        PRECIP_FEATURES
            .iter()
            .position(|f| *f == feature)
            .map(|idx| self.precip_history[idx])
    }

    /// Shorthand for the lag-`days` history feature.
    pub fn precip_lag(&self, days: usize) -> Option<f64> {
        self.precip_feature(PrecipFeature::Lag { days })
    }

    /// Shorthand for the rolling-mean-`window` history feature.
    pub fn precip_roll(&self, window: usize) -> Option<f64> {
        self.precip_feature(PrecipFeature::RollingMean { window })
    }

    /// Flattens the row into the model's feature-vector layout.
    pub fn to_feature_vec(&self) -> Vec<f64> {
        let r = &self.record;
        let mut v = Vec::with_capacity(Dataset::n_features());
        v.extend([
            r.year() as f64,
            r.month() as f64,
            r.day() as f64,
            r.temp_max(),
            r.temp_min(),
            self.temp_mean,
            self.temp_diff,
            r.weekday() as f64,
            self.season.index() as f64,
        ]);
        v.extend_from_slice(&self.precip_history);
        v.extend([
            self.temp_wind_interaction,
            self.tempdiff_wind_interaction,
            self.temp_weekday_interaction,
        ]);
        v
    }
}

/// An immutable, strictly date-ordered table of feature rows.
///
/// Built once per run by [`crate::build`]; every row has all features
/// populated and dates are strictly ascending with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<FeatureRow>,
}

impl Dataset {
    pub(crate) fn from_rows(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    pub(crate) fn into_rows(self) -> Vec<FeatureRow> {
        self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the dataset contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows in chronological order.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Returns the date of each row.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(FeatureRow::date).collect()
    }

    /// Returns the feature matrix, one vector per row in row order.
    pub fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(FeatureRow::to_feature_vec).collect()
    }

    /// Returns the regression target of each row.
    pub fn targets(&self) -> Vec<f64> {
        self.rows.iter().map(FeatureRow::target).collect()
    }

    /// Number of columns in the feature matrix.
    pub fn n_features() -> usize {
        BASE_NAMES.len() + PRECIP_FEATURES.len() + INTERACTION_NAMES.len()
    }

    /// Column names of the feature matrix, in vector order.
    pub fn feature_names() -> Vec<String> {
        let mut names: Vec<String> = BASE_NAMES.iter().map(|s| s.to_string()).collect();
        names.extend(PRECIP_FEATURES.iter().map(|f| f.name()));
        names.extend(INTERACTION_NAMES.iter().map(|s| s.to_string()));
        names
    }
}
