//! HTTP client module
//!
//! Retrieves the raw JSON document from the statistics API.
//!
//! # Behavior
//!
//! - **Single GET**: one outbound request, no retries
//! - **Timeout**: bounded by `HttpClientConfig::timeout` (30s by default)
//! - **Status check**: any non-success status fails with `FetchError::HttpStatus`

mod client;

pub use client::{fetch, HttpClient, HttpClientConfig, HttpClientConfigBuilder};
