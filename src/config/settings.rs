//! Application settings.
//!
//! Settings are read from an optional JSON file. Every field has a default,
//! so a file only needs to name what it changes.

use crate::convert::ConvertOptions;
use crate::error::{ConfigError, ConfigResult};
use crate::output::OutputFormat;
use crate::parser::ParseOptions;
use crate::types::IpPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Conversion and logging defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Separate address groups with blank lines.
    pub group_separator: bool,
    /// Default output format.
    pub format: OutputFormat,
    /// Quote CSV fields.
    pub quote: bool,
    /// Address validation policy used when sorting.
    pub ip_policy: IpPolicy,
    /// Treat a block's first line as a port row when it has that shape.
    pub header_port_lines: bool,
    /// Log filter directive (e.g. "warn", "nmap2csv=debug").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            group_separator: false,
            format: OutputFormat::Csv,
            quote: false,
            ip_policy: IpPolicy::Strict,
            header_port_lines: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Conversion options described by these settings.
    pub fn convert_options(&self) -> ConvertOptions {
        let parse = if self.header_port_lines {
            ParseOptions::new()
        } else {
            ParseOptions::new().without_header_ports()
        };

        ConvertOptions {
            parse,
            ip_policy: self.ip_policy,
            group_separator: self.group_separator,
            format: self.format,
            quote: self.quote,
        }
    }
}
