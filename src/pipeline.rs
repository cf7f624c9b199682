//! Fetch → transform → write orchestration
//!
//! Runs the three stages strictly in order. The first failing stage ends the
//! run; nothing after it executes and no partial output is written.

use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::{self, ParquetWriterConfig};
use crate::transform;
use crate::types::{DEFAULT_OUTPUT_PATH, IPCA_URL};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Endpoint returning the period metadata
    pub url: String,
    /// Destination Parquet file
    pub output: PathBuf,
    /// HTTP client settings
    pub http: HttpClientConfig,
    /// Parquet writer settings
    pub parquet: ParquetWriterConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            url: IPCA_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            http: HttpClientConfig::default(),
            parquet: ParquetWriterConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a config with the fixed endpoint and output path
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the endpoint
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the destination file
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Override HTTP client settings
    #[must_use]
    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Override Parquet writer settings
    #[must_use]
    pub fn with_parquet(mut self, parquet: ParquetWriterConfig) -> Self {
        self.parquet = parquet;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows persisted
    pub rows: usize,
    /// File written
    pub output: PathBuf,
    /// Wall time of the whole run
    pub elapsed: Duration,
}

/// Sequential IPCA pipeline
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run fetch, transform and write once
    pub async fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        info!("Starting IPCA capture from {}", self.config.url);

        let client = HttpClient::with_config(self.config.http.clone())?;
        let raw = client.get_json(&self.config.url).await?;
        info!("Raw data fetched from API");

        let table = transform::transform(&raw)?;

        let rows = output::write_with_config(&table, &self.config.output, &self.config.parquet)?;

        Ok(RunSummary {
            rows,
            output: self.config.output.clone(),
            elapsed: start.elapsed(),
        })
    }
}
