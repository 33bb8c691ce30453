//! Configuration management for nmap2csv.
//!
//! Settings come from an optional JSON file and are overridden by
//! command-line flags.

mod settings;

pub use settings::Settings;
