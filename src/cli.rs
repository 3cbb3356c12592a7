//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Extract affiliate and transaction grids into a CSV output table
#[derive(Debug, Parser)]
#[command(name = "pap-extractor", version, about)]
pub struct Cli {
    /// Data directory root (defaults to $KBC_DATADIR, then /data)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30, value_name = "SECONDS")]
    pub timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
