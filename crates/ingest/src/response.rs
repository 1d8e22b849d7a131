//! Archive response decoding.

use chrono::NaiveDate;
use pluvio_record::RawRecord;
use serde::Deserialize;
use tracing::warn;

use crate::error::IngestError;

/// Body of an archive query: parallel daily arrays under `daily`, where
/// index `i` across all arrays describes the same date.
#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveResponse {
    pub daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DailyBlock {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
    windspeed_10m_max: Vec<Option<f64>>,
}

impl DailyBlock {
    /// Zips the parallel arrays into records.
    ///
    /// Entries with an unparsable date or a null value are dropped with a
    /// logged diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MalformedResponse`] if the arrays disagree
    /// in length.
    pub(crate) fn into_records(self) -> Result<Vec<RawRecord>, IngestError> {
        let n = self.time.len();
        for (name, len) in [
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("windspeed_10m_max", self.windspeed_10m_max.len()),
        ] {
            if len != n {
                return Err(IngestError::MalformedResponse {
                    reason: format!("array '{name}' has {len} entries, expected {n}"),
                });
            }
        }

        let mut records = Vec::with_capacity(n);
        let mut dropped = 0usize;
        for (i, time) in self.time.iter().enumerate() {
            let date = match NaiveDate::parse_from_str(time, "%Y-%m-%d") {
                Ok(date) => date,
                Err(e) => {
                    dropped += 1;
                    warn!(time, error = %e, "dropping entry with unparsable date");
                    continue;
                }
            };
            let (Some(temp_max), Some(temp_min), Some(precipitation), Some(wind_max)) = (
                self.temperature_2m_max[i],
                self.temperature_2m_min[i],
                self.precipitation_sum[i],
                self.windspeed_10m_max[i],
            ) else {
                dropped += 1;
                warn!(%date, "dropping entry with missing values");
                continue;
            };
            match RawRecord::new(date, temp_max, temp_min, precipitation, wind_max) {
                Ok(record) => records.push(record),
                Err(e) => {
                    dropped += 1;
                    warn!(%date, error = %e, "dropping invalid entry");
                }
            }
        }

        if dropped > 0 {
            warn!(dropped, "dropped archive entries");
        }
        Ok(records)
    }
}
