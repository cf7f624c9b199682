//! # IPCA ETL
//!
//! Retrieves Brazil's IPCA price index period table from the IBGE/SIDRA API,
//! normalizes it, and persists it as a Parquet file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ipca_etl::{fetch, output, transform, Result, IPCA_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let raw = fetch(IPCA_URL).await?;
//!     let table = transform(&raw)?;
//!     output::write(&table, "data/ipca_dados.parquet")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   RawResponse   ┌─────────────┐   PeriodTable   ┌──────────┐
//! │  Fetcher  │ ──────────────▶ │ Transformer │ ──────────────▶ │  Writer  │
//! │ http::    │                 │ transform:: │                 │ output:: │
//! └───────────┘                 └─────────────┘                 └──────────┘
//!   FetchError                   TransformError                   WriteError
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for each pipeline stage
pub mod error;

/// Common types and constants
pub mod types;

/// HTTP fetcher
pub mod http;

/// Raw response to period table
pub mod transform;

/// Arrow/Parquet output
pub mod output;

/// Sequential pipeline
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, FetchError, Result, TransformError, WriteError};
pub use http::fetch;
pub use pipeline::{Pipeline, PipelineConfig, RunSummary};
pub use transform::{transform, PeriodRow, PeriodTable};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
