//! Error types for nmap2csv.
//!
//! Uses `thiserror` for ergonomic error definitions. The command-line layer
//! wraps these in `anyhow` with context about which file was involved.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while sorting and rendering parsed records.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("invalid IPv4 address '{ip}' cannot be used as a sort key")]
    InvalidAddress { ip: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rendered output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid config format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
