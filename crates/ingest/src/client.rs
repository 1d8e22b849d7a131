//! Blocking archive client with chunked fetching.

use std::time::Duration;

use chrono::{Days, NaiveDate};
use pluvio_record::RawRecord;
use tracing::{info, warn};

use crate::error::IngestError;
use crate::response::ArchiveResponse;

/// Default archive endpoint.
const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Daily variables requested from the archive.
const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max";

/// Configuration for an [`ArchiveClient`].
///
/// # Example
///
/// ```
/// use pluvio_ingest::IngestConfig;
///
/// let config = IngestConfig::new(50.45, 30.52)
///     .with_timezone("Europe/Kyiv")
///     .with_chunk_days(14);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct IngestConfig {
    latitude: f64,
    longitude: f64,
    timezone: String,
    chunk_days: u32,
    pace: Duration,
    timeout: Duration,
    max_retries: u32,
    base_url: String,
}

impl IngestConfig {
    /// Creates a configuration for the given location.
    ///
    /// Defaults: UTC timezone, 14-day sub-ranges, 1 s pacing, 30 s request
    /// timeout, 3 attempts per sub-range.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            timezone: "UTC".to_string(),
            chunk_days: 14,
            pace: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_url: ARCHIVE_URL.to_string(),
        }
    }

    /// Sets the IANA timezone passed to the archive.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Sets the sub-range length in days.
    pub fn with_chunk_days(mut self, chunk_days: u32) -> Self {
        self.chunk_days = chunk_days;
        self
    }

    /// Sets the pause between consecutive requests.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the number of attempts per sub-range.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Overrides the archive endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the configured latitude.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the configured longitude.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the sub-range length in days.
    pub fn chunk_days(&self) -> u32 {
        self.chunk_days
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidCoordinates`] for out-of-range
    /// coordinates and [`IngestError::InvalidChunk`] for a zero chunk
    /// length.
    pub fn validate(&self) -> Result<(), IngestError> {
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude)
        {
            return Err(IngestError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if self.chunk_days == 0 {
            return Err(IngestError::InvalidChunk {
                chunk_days: self.chunk_days,
            });
        }
        Ok(())
    }
}

/// Splits `[start, end]` into consecutive inclusive sub-ranges of at most
/// `chunk_days` days. A zero chunk length is treated as one day.
pub fn sub_ranges(start: NaiveDate, end: NaiveDate, chunk_days: u32) -> Vec<(NaiveDate, NaiveDate)> {
    let step = u64::from(chunk_days.max(1));
    let mut ranges = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        let chunk_end = cursor
            .checked_add_days(Days::new(step - 1))
            .unwrap_or(end)
            .min(end);
        ranges.push((cursor, chunk_end));
        match chunk_end.checked_add_days(Days::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    ranges
}

/// Blocking client for the Open-Meteo historical archive.
pub struct ArchiveClient {
    http: reqwest::blocking::Client,
    config: IngestConfig,
}

impl ArchiveClient {
    /// Builds a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error from [`IngestConfig::validate`], or
    /// [`IngestError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: IngestConfig) -> Result<Self, IngestError> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetches one sub-range of daily records.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidRange`] if `end < start`,
    /// [`IngestError::Http`] on transport failure,
    /// [`IngestError::Status`] on a non-success response and
    /// [`IngestError::MalformedResponse`] when the body cannot be decoded.
    pub fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawRecord>, IngestError> {
        if end < start {
            return Err(IngestError::InvalidRange { start, end });
        }

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("latitude", self.config.latitude.to_string()),
                ("longitude", self.config.longitude.to_string()),
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
                ("daily", DAILY_VARIABLES.to_string()),
                ("timezone", self.config.timezone.clone()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect();
            return Err(IngestError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: ArchiveResponse =
            response
                .json()
                .map_err(|e| IngestError::MalformedResponse {
                    reason: e.to_string(),
                })?;
        body.daily.into_records()
    }

    /// Fetches a whole period in paced sub-range requests.
    ///
    /// Each sub-range gets up to `max_retries` attempts with a linearly
    /// growing backoff; a sub-range that still fails is skipped with a
    /// warning. The returned records may therefore cover only part of the
    /// period; an entirely empty result is the caller's fatal condition
    /// to raise.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidRange`] if `end < start`.
    pub fn fetch_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawRecord>, IngestError> {
        if end < start {
            return Err(IngestError::InvalidRange { start, end });
        }

        let ranges = sub_ranges(start, end, self.config.chunk_days);
        let n_ranges = ranges.len();
        let mut records = Vec::new();

        for (idx, (chunk_start, chunk_end)) in ranges.into_iter().enumerate() {
            info!(%chunk_start, %chunk_end, "fetching sub-range");

            let mut fetched = None;
            for attempt in 1..=self.config.max_retries {
                match self.fetch_range(chunk_start, chunk_end) {
                    Ok(chunk) => {
                        fetched = Some(chunk);
                        break;
                    }
                    Err(e) => {
                        warn!(%chunk_start, %chunk_end, attempt, error = %e, "sub-range attempt failed");
                        if attempt < self.config.max_retries {
                            std::thread::sleep(self.config.pace * attempt);
                        }
                    }
                }
            }

            match fetched {
                Some(chunk) => records.extend(chunk),
                None => warn!(%chunk_start, %chunk_end, "skipping sub-range after retries"),
            }

            if idx + 1 < n_ranges {
                std::thread::sleep(self.config.pace);
            }
        }

        info!(
            n_records = records.len(),
            n_ranges, "period fetch complete"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = IngestConfig::new(50.45, 30.52);
        assert_eq!(config.chunk_days(), 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_coordinates() {
        let result = IngestConfig::new(95.0, 30.52).validate();
        assert!(matches!(result, Err(IngestError::InvalidCoordinates { .. })));
    }

    #[test]
    fn config_rejects_zero_chunk() {
        let result = IngestConfig::new(50.45, 30.52).with_chunk_days(0).validate();
        assert!(matches!(
            result,
            Err(IngestError::InvalidChunk { chunk_days: 0 })
        ));
    }

    #[test]
    fn client_rejects_invalid_config() {
        let result = ArchiveClient::new(IngestConfig::new(0.0, 200.0));
        assert!(matches!(result, Err(IngestError::InvalidCoordinates { .. })));
    }

    #[test]
    fn sub_ranges_cover_period_exactly() {
        let ranges = sub_ranges(date(2015, 1, 1), date(2015, 1, 31), 14);
        assert_eq!(
            ranges,
            vec![
                (date(2015, 1, 1), date(2015, 1, 14)),
                (date(2015, 1, 15), date(2015, 1, 28)),
                (date(2015, 1, 29), date(2015, 1, 31)),
            ]
        );
    }

    #[test]
    fn sub_ranges_single_day() {
        let ranges = sub_ranges(date(2015, 6, 1), date(2015, 6, 1), 14);
        assert_eq!(ranges, vec![(date(2015, 6, 1), date(2015, 6, 1))]);
    }

    #[test]
    fn sub_ranges_exact_multiple() {
        let ranges = sub_ranges(date(2015, 1, 1), date(2015, 1, 28), 14);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[1], (date(2015, 1, 15), date(2015, 1, 28)));
    }
}
