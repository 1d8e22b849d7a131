use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pluvio daily precipitation forecasting pipeline.
#[derive(Parser)]
#[command(
    name = "pluvio",
    version,
    about = "Daily precipitation forecasting over the Open-Meteo archive"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch raw daily records from the archive into per-year CSV files.
    Fetch(FetchArgs),
    /// Build features, train the model and evaluate it on held-out data.
    Train(TrainArgs),
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pluvio.toml")]
    pub config: PathBuf,

    /// Fetch a single year instead of the configured range.
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `train` subcommand.
#[derive(clap::Args)]
pub struct TrainArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pluvio.toml")]
    pub config: PathBuf,

    /// Write the evaluation report as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
