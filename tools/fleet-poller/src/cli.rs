use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use source_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Where source data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClientMode {
    /// Fetch each source document over HTTP
    Live,
    /// Generate seeded random data locally
    Simulated,
}

#[derive(Debug, Parser)]
#[command(
    name = "fleet-poller",
    disable_help_subcommand = true,
    about = "Report fleet-wide storage superlatives",
    long_about = concat!(
        "Poll every source in the fleet and report the source(s) with the largest total size, ",
        "the source(s) with the most records, and the largest record(s) of each source."
    ),
    after_help = "Sources are numbered 0..N. Failed sources are logged and excluded."
)]
pub struct Cli {
    #[arg(
        short = 'n',
        long = "sources",
        default_value_t = 15,
        help = "Number of sources in the fleet (ids 0..N)"
    )]
    pub sources: u32,
    #[arg(
        short = 't',
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Per-source timeout in seconds"
    )]
    pub timeout: f64,
    #[arg(long, value_enum, default_value_t = ClientMode::Simulated, help = "Data source mode")]
    pub mode: ClientMode,
    #[arg(
        long = "base-url",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        help = "Prefix of every source URL in live mode"
    )]
    pub base_url: String,
    #[arg(long, default_value_t = 0, help = "Seed for simulated data")]
    pub seed: u64,
    #[arg(
        long = "max-records",
        value_name = "COUNT",
        help = "Upper bound on simulated records per source"
    )]
    pub max_records: Option<usize>,
    #[arg(long, value_name = "PATH", help = "Also write the report as JSON to this file")]
    pub json: Option<PathBuf>,
}
