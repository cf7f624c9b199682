//! Output module
//!
//! Handles Arrow RecordBatch creation and Parquet file writing for the
//! period table.

mod schema;
mod writer;

pub use schema::{period_schema, table_to_batch};
pub use writer::{write, write_with_config, ParquetWriterConfig};
