//! Record formatter.
//!
//! Sorts parsed records by address and port, lays them out as table rows
//! with optional blank separators between address groups, and renders the
//! rows as CSV or JSON.

mod csv_format;
mod json_format;

pub use csv_format::quoted_lines;
pub use json_format::to_json;

use crate::error::ReportResult;
use crate::types::{IpPolicy, Record, SortKey, CSV_HEADER};
use console::style;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format for converted reports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated table, one row per port
    #[default]
    Csv,
    /// JSON array of records
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One line of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// The fixed column header.
    Header,
    /// Blank line between two address groups.
    Separator,
    Record(&'a Record),
}

/// Sort records by address, then port.
///
/// The sort is stable, so records with equal keys keep their input order.
/// Every key is computed before anything is reordered, so an invalid
/// address under [`IpPolicy::Strict`] fails the whole batch.
pub fn sort_records(records: Vec<Record>, policy: IpPolicy) -> ReportResult<Vec<Record>> {
    let mut keyed = records
        .into_iter()
        .map(|record| SortKey::for_record(&record, policy).map(|key| (key, record)))
        .collect::<ReportResult<Vec<_>>>()?;

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Lay out sorted records as table rows.
///
/// The previous record's address is threaded through the fold; a separator
/// is inserted whenever it changes, never before the first group.
pub fn layout(records: &[Record], group_separator: bool) -> Vec<Row<'_>> {
    let (rows, _) = records.iter().fold(
        (vec![Row::Header], None::<&str>),
        |(mut rows, previous_ip), record| {
            if group_separator && previous_ip.is_some_and(|ip| ip != record.ip) {
                rows.push(Row::Separator);
            }
            rows.push(Row::Record(record));
            (rows, Some(record.ip.as_str()))
        },
    );
    rows
}

/// Render sorted records as CSV lines, fields joined without quoting.
pub fn format_lines(records: &[Record], group_separator: bool) -> Vec<String> {
    layout(records, group_separator)
        .into_iter()
        .map(|row| match row {
            Row::Header => CSV_HEADER.join(","),
            Row::Separator => String::new(),
            Row::Record(record) => record.to_string(),
        })
        .collect()
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn port(ip: &str, port: &str) -> Record {
        Record::new(ip, "h", port, "tcp", "open", "svc")
    }

    #[test]
    fn test_header_always_first() {
        assert_eq!(
            format_lines(&[], false),
            vec!["IP,HOSTNAME,PORT,PROTO,STATE,DESCRIPTION"]
        );
        assert_eq!(
            format_lines(&[port("10.0.0.1", "22")], true)[0],
            "IP,HOSTNAME,PORT,PROTO,STATE,DESCRIPTION"
        );
    }

    #[test]
    fn test_sort_by_address() {
        let records = vec![port("10.0.0.2", "80"), port("10.0.0.1", "80")];
        let sorted = sort_records(records, IpPolicy::Strict).unwrap();
        assert_eq!(sorted[0].ip, "10.0.0.1");
        assert_eq!(sorted[1].ip, "10.0.0.2");
    }

    #[test]
    fn test_sort_address_numerically() {
        let records = vec![
            port("10.0.0.10", "80"),
            port("9.255.255.255", "80"),
            port("10.0.0.9", "80"),
        ];
        let sorted = sort_records(records, IpPolicy::Strict).unwrap();
        let ips: Vec<&str> = sorted.iter().map(|r| r.ip.as_str()).collect();
        assert_eq!(ips, vec!["9.255.255.255", "10.0.0.9", "10.0.0.10"]);
    }

    #[test]
    fn test_sort_ports_numerically_placeholder_first() {
        let records = vec![
            port("10.0.0.1", "443"),
            port("10.0.0.1", "80"),
            Record::placeholder("10.0.0.1", "h"),
            port("10.0.0.1", "8080"),
        ];
        let sorted = sort_records(records, IpPolicy::Strict).unwrap();
        let ports: Vec<&str> = sorted.iter().map(|r| r.port.as_str()).collect();
        assert_eq!(ports, vec!["-", "80", "443", "8080"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![
            Record::new("10.0.0.1", "h", "80", "tcp", "open", "first"),
            Record::new("10.0.0.1", "h", "80", "udp", "open", "second"),
        ];
        let sorted = sort_records(records.clone(), IpPolicy::Strict).unwrap();
        assert_eq!(sorted, records);
    }

    #[test]
    fn test_strict_sort_rejects_empty_address() {
        let records = vec![port("10.0.0.1", "80"), port("", "22")];
        let err = sort_records(records, IpPolicy::Strict).unwrap_err();
        assert!(matches!(err, ReportError::InvalidAddress { ip } if ip.is_empty()));
    }

    #[test]
    fn test_lenient_sort_accepts_loose_addresses() {
        let records = vec![
            port("999.0.0.1", "80"),
            port("10.0.0.1", "80"),
            port("", "22"),
        ];
        let sorted = sort_records(records, IpPolicy::Lenient).unwrap();
        let ips: Vec<&str> = sorted.iter().map(|r| r.ip.as_str()).collect();
        assert_eq!(ips, vec!["", "10.0.0.1", "999.0.0.1"]);
    }

    #[test]
    fn test_group_separators() {
        let records = vec![
            port("10.0.0.1", "22"),
            port("10.0.0.1", "80"),
            port("10.0.0.2", "22"),
            port("10.0.0.2", "80"),
        ];
        let lines = format_lines(&records, true);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 1);
        assert_eq!(lines[3], "");
        assert!(!lines.last().unwrap().is_empty());
    }

    #[test]
    fn test_no_separators_when_disabled() {
        let records = vec![port("10.0.0.1", "22"), port("10.0.0.2", "22")];
        let lines = format_lines(&records, false);
        assert!(lines.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_layout_rows() {
        let records = vec![port("10.0.0.1", "22"), port("10.0.0.2", "22")];
        let rows = layout(&records, true);
        assert_eq!(
            rows,
            vec![
                Row::Header,
                Row::Record(&records[0]),
                Row::Separator,
                Row::Record(&records[1]),
            ]
        );
    }

    #[test]
    fn test_fields_recoverable_from_line() {
        let record = Record::new("10.0.0.1", "h", "22", "tcp", "open", "ssh OpenSSH (a, b, c)");
        let lines = format_lines(std::slice::from_ref(&record), false);
        let fields: Vec<&str> = lines[1].splitn(6, ',').collect();
        assert_eq!(fields, record.fields());
    }
}
