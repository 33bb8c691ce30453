//! Core type definitions shared by the parser and the formatter.

mod address;
mod record;

pub use address::{IpPolicy, SortKey};
pub use record::{Record, CSV_HEADER, PLACEHOLDER, UNKNOWN_HOSTNAME};
