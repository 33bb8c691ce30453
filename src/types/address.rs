//! Sort keys and the policy deciding how extracted addresses are validated.
//!
//! Address extraction in the parser is deliberately loose: any four groups
//! of one to three digits are accepted. Sorting needs a numeric key, and the
//! [`IpPolicy`] decides what happens to addresses that are not real IPv4
//! addresses.

use crate::error::{ReportError, ReportResult};
use crate::types::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// How sort keys are derived from extracted addresses.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IpPolicy {
    /// Reject empty or out-of-range addresses at sort time
    #[default]
    Strict,
    /// Order any dotted quad by its numeric groups; empty addresses first
    Lenient,
}

impl IpPolicy {
    /// Compute the address part of a sort key.
    ///
    /// Octets are widened to `u16` so lenient keys for values like `999`
    /// compare numerically; for valid addresses the ordering matches the
    /// 32-bit address value.
    pub fn address_key(self, ip: &str) -> ReportResult<Option<[u16; 4]>> {
        match self {
            Self::Strict => ip
                .parse::<Ipv4Addr>()
                .map(|addr| Some(addr.octets().map(u16::from)))
                .map_err(|_| ReportError::InvalidAddress { ip: ip.to_string() }),
            Self::Lenient => Ok(dotted_quad(ip)),
        }
    }
}

impl fmt::Display for IpPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// Split a loose dotted quad into its numeric groups.
fn dotted_quad(ip: &str) -> Option<[u16; 4]> {
    let mut octets = [0u16; 4];
    let mut parts = ip.split('.');

    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }

    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}

/// Ordering key for a record: address first, then port.
///
/// `None` sorts before `Some`, so portless placeholders lead their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    address: Option<[u16; 4]>,
    port: Option<u64>,
}

impl SortKey {
    /// Build the key for a record under the given policy.
    pub fn for_record(record: &Record, policy: IpPolicy) -> ReportResult<Self> {
        Ok(Self {
            address: policy.address_key(&record.ip)?,
            port: record.port_number(),
        })
    }
}
