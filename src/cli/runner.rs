//! CLI runner - builds the pipeline from arguments and runs it

use crate::cli::commands::Cli;
use crate::error::Result;
use crate::http::HttpClientConfig;
use crate::pipeline::{Pipeline, PipelineConfig, RunSummary};
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Pipeline configuration derived from the arguments
    pub fn pipeline_config(&self) -> PipelineConfig {
        let http = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.cli.timeout))
            .build();

        PipelineConfig::new()
            .with_url(&self.cli.url)
            .with_output(&self.cli.output)
            .with_http(http)
    }

    /// Run the pipeline once
    pub async fn run(&self) -> Result<RunSummary> {
        let summary = Pipeline::new(self.pipeline_config()).run().await?;

        info!(
            "Done: {} rows written to {} in {:?}",
            summary.rows,
            summary.output.display(),
            summary.elapsed
        );

        Ok(summary)
    }
}
