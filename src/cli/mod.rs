//! CLI module
//!
//! Command-line interface for running the pipeline. Every flag is optional;
//! with none the binary fetches the fixed SIDRA endpoint and writes
//! `data/ipca_dados.parquet`.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
