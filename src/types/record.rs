//! The flat output record produced for every port (or portless host).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value used for every port field of a host without reported ports.
pub const PLACEHOLDER: &str = "-";

/// Hostname used when the report header carries no resolved name.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Column names, in output order.
pub const CSV_HEADER: [&str; 6] = ["IP", "HOSTNAME", "PORT", "PROTO", "STATE", "DESCRIPTION"];

/// One output row.
///
/// The four port fields are either all taken from a single port line or all
/// set to [`PLACEHOLDER`]; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Dotted-quad address from the host header, or empty.
    pub ip: String,
    /// Resolved hostname, or [`UNKNOWN_HOSTNAME`].
    pub hostname: String,
    /// Port number as written in the report.
    pub port: String,
    /// Transport protocol token.
    pub proto: String,
    /// Port state token.
    pub state: String,
    /// Service description, possibly containing spaces and commas.
    pub description: String,
}

impl Record {
    /// Create a record for a reported port.
    pub fn new(
        ip: impl Into<String>,
        hostname: impl Into<String>,
        port: impl Into<String>,
        proto: impl Into<String>,
        state: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            hostname: hostname.into(),
            port: port.into(),
            proto: proto.into(),
            state: state.into(),
            description: description.into(),
        }
    }

    /// Create the single record emitted for a host with no port lines.
    pub fn placeholder(ip: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self::new(
            ip,
            hostname,
            PLACEHOLDER,
            PLACEHOLDER,
            PLACEHOLDER,
            PLACEHOLDER,
        )
    }

    /// Check if this record stands in for a host without ports.
    pub fn is_placeholder(&self) -> bool {
        self.port == PLACEHOLDER
            && self.proto == PLACEHOLDER
            && self.state == PLACEHOLDER
            && self.description == PLACEHOLDER
    }

    /// Numeric port used for ordering.
    ///
    /// `None` for anything that is not purely ASCII digits, which orders it
    /// before every real port. Unicode decimal digits are not treated as
    /// numbers. Values too large for `u64` saturate.
    pub fn port_number(&self) -> Option<u64> {
        if self.port.is_empty() || !self.port.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(self.port.parse().unwrap_or(u64::MAX))
    }

    /// All six fields in column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.ip,
            &self.hostname,
            &self.port,
            &self.proto,
            &self.state,
            &self.description,
        ]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields().join(","))
    }
}
