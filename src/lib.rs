//! # nmap2csv - Nmap Report to CSV Converter
//!
//! nmap2csv turns the normal (human-readable) text output of Nmap into a
//! sorted table with one row per reported port, or one row per host when
//! no ports were reported.
//!
//! ## Features
//!
//! - **Host block parsing**: Address, hostname and port rows per host
//! - **Deterministic ordering**: Sorted by IPv4 address, then port
//! - **Grouping**: Optional blank line between address groups
//! - **Output formats**: Raw CSV, RFC 4180 quoted CSV, and JSON
//! - **Address policies**: Strict or lenient handling of malformed addresses
//!
//! ## Example Usage
//!
//! ```rust
//! use nmap2csv::convert::{convert, ConvertOptions};
//!
//! let report = "Nmap scan report for host1 (10.0.0.5)\n22/tcp open ssh OpenSSH 9.6";
//! let csv = convert(report, &ConvertOptions::new()).unwrap();
//!
//! assert_eq!(
//!     csv,
//!     "IP,HOSTNAME,PORT,PROTO,STATE,DESCRIPTION\n10.0.0.5,host1,22,tcp,open,ssh OpenSSH 9.6\n"
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`parser`] - Host block splitting and line classification
//! - [`output`] - Sorting, grouping and rendering
//! - [`types`] - Records and sort keys
//! - [`convert`] - The parse, sort, render pipeline
//! - [`config`] - Settings file support
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use convert::{convert, ConvertOptions};
pub use error::{ConfigError, ReportError};
pub use output::OutputFormat;
pub use parser::{parse, ParseOptions};
pub use types::{IpPolicy, Record};
