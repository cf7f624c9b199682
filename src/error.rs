//! Error types for the IPCA pipeline
//!
//! Each pipeline stage has its own error enum carrying the root cause and the
//! context it failed in (URL, record position, output path). The umbrella
//! [`Error`] lets the entry point handle all of them through one `Result`.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Fetch Errors
// ============================================================================

/// Failure while retrieving the raw response
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Invalid JSON from {url}: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// URL the failed request targeted, if the failure concerns a request
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::ClientBuild(_) => None,
            Self::InvalidUrl { url, .. }
            | Self::Timeout { url, .. }
            | Self::Request { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::InvalidJson { url, .. } => Some(url),
        }
    }
}

// ============================================================================
// Transform Errors
// ============================================================================

/// Failure while reshaping the raw response into a period table
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Missing field '{path}' in response")]
    MissingField { path: String },

    #[error("No period records found at '{path}'")]
    EmptyPeriods { path: String },

    #[error("Expected {expected} at '{path}', found {found}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Period record {index} is not an object (found {found})")]
    InvalidRecord { index: usize, found: &'static str },

    #[error("Invalid value for '{field}' in period record {index}: {message}")]
    InvalidField {
        index: usize,
        field: &'static str,
        message: String,
    },
}

// ============================================================================
// Write Errors
// ============================================================================

/// Failure while persisting the period table
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write Parquet file {}: {source}", .path.display())]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },

    #[error("Failed to build record batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

// ============================================================================
// Umbrella Error
// ============================================================================

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Transform,
    Write,
}

/// The main error type for the pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("Write failed: {0}")]
    Write(#[from] WriteError),
}

impl Error {
    /// Stage the error originated from
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Fetch(_) => ErrorKind::Fetch,
            Error::Transform(_) => ErrorKind::Transform,
            Error::Write(_) => ErrorKind::Write,
        }
    }
}

/// Result type alias for the pipeline
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::HttpStatus {
            url: "https://example.com/api".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 503 from https://example.com/api: unavailable"
        );

        let err = TransformError::MissingField {
            path: "Periodos.Periodos".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing field 'Periodos.Periodos' in response"
        );

        let err = Error::from(TransformError::EmptyPeriods {
            path: "Periodos.Periodos".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Transform failed: No period records found at 'Periodos.Periodos'"
        );
    }

    #[test]
    fn test_fetch_error_url() {
        let err = FetchError::Timeout {
            url: "https://example.com".to_string(),
            timeout_ms: 30_000,
        };
        assert_eq!(err.url(), Some("https://example.com"));
        assert!(err.to_string().contains("30000ms"));
    }

    #[test]
    fn test_error_kind() {
        let fetch: Error = FetchError::Timeout {
            url: String::new(),
            timeout_ms: 1,
        }
        .into();
        assert_eq!(fetch.kind(), ErrorKind::Fetch);

        let transform: Error = TransformError::InvalidRecord {
            index: 0,
            found: "string",
        }
        .into();
        assert_eq!(transform.kind(), ErrorKind::Transform);

        let write: Error = WriteError::CreateDir {
            path: PathBuf::from("/root/data"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .into();
        assert_eq!(write.kind(), ErrorKind::Write);
        assert!(write.to_string().contains("/root/data"));
    }
}
