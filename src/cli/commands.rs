//! CLI arguments

use crate::types::{DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT, IPCA_URL};
use clap::Parser;
use std::path::PathBuf;

/// Capture the IPCA period table from IBGE/SIDRA and save it as Parquet
///
/// All arguments are optional; running without any reproduces the fixed
/// endpoint and output path.
#[derive(Parser, Debug)]
#[command(name = "ipca-etl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Endpoint returning the period metadata
    #[arg(long, default_value = IPCA_URL)]
    pub url: String,

    /// Destination Parquet file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
