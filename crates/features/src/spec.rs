//! Declarative precipitation-history feature specifications.

use chrono::{Days, NaiveDate};

/// A feature derived from the precipitation history of earlier days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipFeature {
    /// Precipitation exactly `days` calendar days before the row.
    Lag {
        /// Number of days to look back.
        days: usize,
    },
    /// Mean precipitation over the `window` calendar days ending the day
    /// before the row, so the row's own value never enters its window.
    RollingMean {
        /// Window length in days.
        window: usize,
    },
}

/// The history features every dataset row carries, applied uniformly.
/// Adding a lag or window size here is the only change needed.
pub const PRECIP_FEATURES: &[PrecipFeature] = &[
    PrecipFeature::Lag { days: 1 },
    PrecipFeature::Lag { days: 2 },
    PrecipFeature::Lag { days: 3 },
    PrecipFeature::RollingMean { window: 3 },
    PrecipFeature::RollingMean { window: 5 },
    PrecipFeature::RollingMean { window: 7 },
];

impl PrecipFeature {
    /// Column name of this feature in the feature matrix.
    pub fn name(&self) -> String {
        match self {
            PrecipFeature::Lag { days } => format!("precip_lag{days}"),
            PrecipFeature::RollingMean { window } => format!("precip_roll{window}"),
        }
    }

    /// How many preceding calendar days this feature needs.
    pub fn reach(&self) -> usize {
        match self {
            PrecipFeature::Lag { days } => *days,
            PrecipFeature::RollingMean { window } => *window,
        }
    }

    /// Computes this feature for the row at `i` over the sorted series.
    ///
    /// `dates` must be strictly ascending with no duplicates (the builder
    /// guarantees this). Returns `None` when the required preceding
    /// calendar days are not present in the series, either because `i` is
    /// too early or because a gap interrupts the window.
    pub(crate) fn compute(&self, dates: &[NaiveDate], precip: &[f64], i: usize) -> Option<f64> {
        let reach = self.reach();
        if i < reach {
            return None;
        }
        // With strictly ascending unique dates, matching the oldest day of
        // the window pins every day in between to consecutive dates.
        let oldest = dates[i].checked_sub_days(Days::new(reach as u64))?;
        if dates[i - reach] != oldest {
            return None;
        }
        match self {
            PrecipFeature::Lag { days } => Some(precip[i - days]),
            PrecipFeature::RollingMean { window } => {
                let slice = &precip[i - window..i];
                Some(slice.iter().sum::<f64>() / *window as f64)
            }
        }
    }
}
