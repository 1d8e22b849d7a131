//! Raw daily observation with calendar context.

use chrono::{Datelike, NaiveDate};

use crate::error::RecordError;

/// A single day's raw weather observation.
///
/// The date is the single source of truth for calendar context: year,
/// month, day and weekday are derived accessors, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord {
    date: NaiveDate,
    temp_max: f64,
    temp_min: f64,
    precipitation: f64,
    wind_max: f64,
}

impl RawRecord {
    /// Creates a new `RawRecord` after validating the numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NonFinite`] if any numeric field is NaN or
    /// infinite.
    pub fn new(
        date: NaiveDate,
        temp_max: f64,
        temp_min: f64,
        precipitation: f64,
        wind_max: f64,
    ) -> Result<Self, RecordError> {
        for (field, value) in [
            ("temp_max", temp_max),
            ("temp_min", temp_min),
            ("precipitation", precipitation),
            ("wind_max", wind_max),
        ] {
            if !value.is_finite() {
                return Err(RecordError::NonFinite { field, value });
            }
        }

        Ok(Self {
            date,
            temp_max,
            temp_min,
            precipitation,
            wind_max,
        })
    }

    /// Returns the observation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the calendar month (1..=12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns the weekday as 0 = Monday .. 6 = Sunday.
    pub fn weekday(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }

    /// Returns the daily maximum temperature (degrees Celsius).
    pub fn temp_max(&self) -> f64 {
        self.temp_max
    }

    /// Returns the daily minimum temperature (degrees Celsius).
    pub fn temp_min(&self) -> f64 {
        self.temp_min
    }

    /// Returns the daily precipitation sum (millimeters).
    pub fn precipitation(&self) -> f64 {
        self.precipitation
    }

    /// Returns the daily maximum wind speed (km/h).
    pub fn wind_max(&self) -> f64 {
        self.wind_max
    }
}
