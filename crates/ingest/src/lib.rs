//! Acquisition of raw daily weather records from the Open-Meteo
//! historical archive.
//!
//! Network I/O happens in bounded sub-range requests with a per-request
//! timeout, inter-request pacing and per-sub-range retries. A sub-range
//! that keeps failing is skipped and logged rather than aborting the
//! whole ingestion.

mod client;
mod error;
mod response;

pub use client::{sub_ranges, ArchiveClient, IngestConfig};
pub use error::IngestError;
