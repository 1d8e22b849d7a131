//! Fetch command: acquire raw records into per-year CSV files.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{info, info_span, warn};

use pluvio_ingest::{ArchiveClient, IngestConfig};
use pluvio_store::{write_records, year_file};

use crate::cli::FetchArgs;
use crate::config::PluvioConfig;

/// Run the acquisition pipeline.
pub fn run(args: FetchArgs) -> Result<()> {
    let _cmd = info_span!("fetch").entered();
    let config = PluvioConfig::load(&args.config)?;

    let years: Vec<i32> = match args.year {
        Some(year) => vec![year],
        None => (config.data.start_year..=config.data.end_year).collect(),
    };
    if years.is_empty() {
        bail!("no years to fetch: check [data].start_year and [data].end_year");
    }

    std::fs::create_dir_all(&config.data.dir).with_context(|| {
        format!(
            "failed to create data directory: {}",
            config.data.dir.display()
        )
    })?;

    let ingest_cfg = IngestConfig::new(config.location.latitude, config.location.longitude)
        .with_timezone(config.location.timezone.as_str())
        .with_chunk_days(config.ingest.chunk_days)
        .with_pace(Duration::from_millis(config.ingest.pace_ms))
        .with_timeout(Duration::from_secs(config.ingest.timeout_secs))
        .with_max_retries(config.ingest.max_retries);
    let client = ArchiveClient::new(ingest_cfg).context("failed to build archive client")?;

    let today = Local::now().date_naive();
    let mut total = 0usize;

    for year in years {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| anyhow::anyhow!("invalid year: {year}"))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| anyhow::anyhow!("invalid year: {year}"))?;

        if start > today {
            warn!(year, "year lies in the future, skipping");
            continue;
        }
        // The archive has no data for days that have not happened yet.
        let end = end.min(today);

        info!(year, %start, %end, "fetching year");
        let records = client
            .fetch_history(start, end)
            .with_context(|| format!("fetching year {year} failed"))?;

        if records.is_empty() {
            warn!(year, "no records acquired for year");
            continue;
        }

        let path = year_file(&config.data.dir, year);
        write_records(&path, &records)
            .with_context(|| format!("failed to persist year {year}"))?;
        info!(year, n_records = records.len(), path = %path.display(), "year written");
        total += records.len();
    }

    if total == 0 {
        bail!("no records were acquired for the whole period");
    }
    info!(total, "fetch complete");
    Ok(())
}
