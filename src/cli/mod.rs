//! Command-line interface for nmap2csv.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flags
//! override values from the optional settings file.

mod io;

pub use io::{read_input, write_output};

use crate::config::Settings;
use crate::convert;
use crate::output::OutputFormat;
use crate::types::IpPolicy;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Convert Nmap text output into a CSV table, one row per port.
///
/// Reads FILE, or standard input when no file is given:
///
///   nmap -sV 10.0.0.0/24 | nmap2csv -d
#[derive(Parser, Debug)]
#[command(name = "nmap2csv")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert Nmap scan reports to CSV", long_about = None)]
pub struct Cli {
    /// File containing Nmap output (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Add an empty line between each new block of IP addresses
    #[arg(short, long)]
    pub delimiter: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Quote CSV fields that contain commas or quotes
    #[arg(long)]
    pub quote: bool,

    /// How to handle addresses that are not valid IPv4 when sorting
    #[arg(long, value_enum, value_name = "POLICY")]
    pub ip_policy: Option<IpPolicy>,

    /// Never treat the first line of a host block as a port row
    #[arg(long)]
    pub skip_header_ports: bool,

    /// Path to a JSON settings file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve settings: file (or defaults), then flags on top.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if self.delimiter {
            settings.group_separator = true;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.quote {
            settings.quote = true;
        }
        if let Some(policy) = self.ip_policy {
            settings.ip_policy = policy;
        }
        if self.skip_header_ports {
            settings.header_port_lines = false;
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }

        Ok(settings)
    }

    /// Read the report, convert it, and write the result.
    pub fn execute(&self, settings: &Settings) -> anyhow::Result<()> {
        let raw = read_input(self.file.as_deref())?;
        info!(bytes = raw.len(), "read scan report");

        let content = convert::convert(&raw, &settings.convert_options())
            .context("failed to convert scan report")?;

        write_output(self.output.as_deref(), &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["nmap2csv"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.delimiter);
        assert_eq!(cli.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_delimiter_flags() {
        let cli = Cli::try_parse_from(["nmap2csv", "-d", "scan.txt"]).unwrap();
        assert!(cli.delimiter);
        assert_eq!(cli.file, Some(PathBuf::from("scan.txt")));

        let cli = Cli::try_parse_from(["nmap2csv", "--delimiter"]).unwrap();
        assert!(cli.settings().unwrap().group_separator);
    }

    #[test]
    fn test_help_is_not_an_error_kind() {
        let err = Cli::try_parse_from(["nmap2csv", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = Cli::try_parse_from(["nmap2csv", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");
        fs::write(&config, r#"{"ip_policy": "lenient", "format": "json"}"#).unwrap();

        let cli = Cli::try_parse_from([
            "nmap2csv",
            "--config",
            config.to_str().unwrap(),
            "--format",
            "csv",
            "--skip-header-ports",
        ])
        .unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(settings.ip_policy, IpPolicy::Lenient);
        assert_eq!(settings.format, OutputFormat::Csv);
        assert!(!settings.header_port_lines);
    }

    #[test]
    fn test_execute_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.txt");
        let output = dir.path().join("scan.csv");
        fs::write(
            &input,
            "Nmap scan report for b (10.0.0.2)\n22/tcp open ssh\nNmap scan report for a (10.0.0.1)\n80/tcp open http\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "nmap2csv",
            "-d",
            "-o",
            output.to_str().unwrap(),
            input.to_str().unwrap(),
        ])
        .unwrap();
        cli.execute(&cli.settings().unwrap()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "IP,HOSTNAME,PORT,PROTO,STATE,DESCRIPTION\n\
             10.0.0.1,a,80,tcp,open,http\n\
             \n\
             10.0.0.2,b,22,tcp,open,ssh\n"
        );
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let cli = Cli::try_parse_from(["nmap2csv", missing.to_str().unwrap()]).unwrap();

        let err = cli.execute(&cli.settings().unwrap()).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_execute_bad_address_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scan.txt");
        let output = dir.path().join("scan.csv");
        fs::write(&input, "Nmap scan report for 300.1.1.1\n22/tcp open ssh\n").unwrap();

        let cli = Cli::try_parse_from([
            "nmap2csv",
            "-o",
            output.to_str().unwrap(),
            input.to_str().unwrap(),
        ])
        .unwrap();
        assert!(cli.execute(&cli.settings().unwrap()).is_err());
        assert!(!output.exists());
    }
}
