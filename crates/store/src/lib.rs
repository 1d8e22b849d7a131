//! Flat-file persistence for raw daily weather records.
//!
//! One UTF-8 delimited text table per year with the header
//! `date,year,month,day,weekday,temp_max,temp_min,precipitation,wind_max`.
//! The `date` column is authoritative on read; the redundant calendar
//! columns are regenerated from it.

mod error;
mod reader;
mod row;
mod writer;

use std::path::{Path, PathBuf};

pub use error::StoreError;
pub use reader::read_records;
pub use writer::write_records;

/// Returns the conventional path of a year's record file.
pub fn year_file(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("weather_{year}.csv"))
}
