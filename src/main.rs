//! IPCA ETL CLI
//!
//! Fetches the IPCA period table and saves it as Parquet.

use clap::Parser;
use ipca_etl::cli::{Cli, Runner};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        error!(kind = ?e.kind(), "{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
