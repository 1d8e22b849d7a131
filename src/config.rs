use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level pluvio configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluvioConfig {
    /// Observation location.
    #[serde(default)]
    pub location: LocationToml,

    /// Record storage settings.
    #[serde(default)]
    pub data: DataToml,

    /// Acquisition settings.
    #[serde(default)]
    pub ingest: IngestToml,

    /// Train/test split settings.
    #[serde(default)]
    pub split: SplitToml,

    /// Model settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,
}

impl PluvioConfig {
    /// Loads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

// Kyiv city centre.
fn default_latitude() -> f64 {
    50.45
}
fn default_longitude() -> f64 {
    30.52
}
fn default_timezone() -> String {
    "Europe/Kyiv".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_start_year() -> i32 {
    2015
}
fn default_end_year() -> i32 {
    2024
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestToml {
    #[serde(default = "default_chunk_days")]
    pub chunk_days: u32,
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for IngestToml {
    fn default() -> Self {
        Self {
            chunk_days: default_chunk_days(),
            pace_ms: default_pace_ms(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_chunk_days() -> u32 {
    14
}
fn default_pace_ms() -> u64 {
    1000
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_max_retries() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitToml {
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
}

impl Default for SplitToml {
    fn default() -> Self {
        Self {
            test_fraction: default_test_fraction(),
        }
    }
}

fn default_test_fraction() -> f64 {
    0.2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_max_depth")]
    pub max_depth: u16,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            seed: default_seed(),
        }
    }
}

fn default_max_depth() -> u16 {
    5
}
fn default_seed() -> u64 {
    42
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    #[serde(default = "default_top_errors")]
    pub top_errors: usize,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            top_errors: default_top_errors(),
        }
    }
}

fn default_top_errors() -> usize {
    10
}
