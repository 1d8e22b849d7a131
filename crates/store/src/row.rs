//! On-disk row layout.

use chrono::NaiveDate;
use pluvio_record::RawRecord;
use serde::{Deserialize, Serialize};

/// One line of a record file. Field order defines the header order.
///
/// The calendar columns after `date` are redundant: they are written for
/// format compatibility and regenerated from `date` when reading.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CsvRow {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
    pub temp_max: f64,
    pub temp_min: f64,
    pub precipitation: f64,
    pub wind_max: f64,
}

impl From<&RawRecord> for CsvRow {
    fn from(record: &RawRecord) -> Self {
        Self {
            date: record.date(),
            year: record.year(),
            month: record.month(),
            day: record.day(),
            weekday: record.weekday(),
            temp_max: record.temp_max(),
            temp_min: record.temp_min(),
            precipitation: record.precipitation(),
            wind_max: record.wind_max(),
        }
    }
}
