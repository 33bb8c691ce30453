//! Report parser.
//!
//! Turns Nmap's normal text output into a flat list of [`Record`]s:
//!
//! 1. The trimmed input is split into host blocks, each starting at a
//!    `Nmap scan report for` line. The first block starts at the top of the
//!    input whatever its first line is.
//! 2. The block's first line supplies the address and hostname.
//! 3. Every port table row in the block becomes one record; a block with an
//!    address but no rows becomes a single placeholder record.

pub mod lexer;

use crate::types::{Record, UNKNOWN_HOSTNAME};
use lexer::{LineKind, PortLine};
use tracing::{debug, trace};

/// Parser behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Count a block's first line as a port row when it has that shape.
    ///
    /// Only the first block can have such a header, when the input starts
    /// directly with a port table instead of a report header.
    pub header_port_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header_port_lines: true,
        }
    }
}

impl ParseOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Never treat a block's first line as a port row.
    pub fn without_header_ports(mut self) -> Self {
        self.header_port_lines = false;
        self
    }
}

/// A host section of the report, reduced to the lines that matter.
#[derive(Debug)]
struct HostBlock<'a> {
    header: &'a str,
    /// Set when the header line itself has the port-row shape.
    header_port: Option<PortLine<'a>>,
    ports: Vec<PortLine<'a>>,
}

impl<'a> HostBlock<'a> {
    fn new(header: &'a str, kind: LineKind<'a>) -> Self {
        let header_port = match kind {
            LineKind::Port(port) => Some(port),
            _ => None,
        };
        Self {
            header,
            header_port,
            ports: Vec::new(),
        }
    }

    fn into_records(self, options: &ParseOptions) -> Vec<Record> {
        let ip = lexer::extract_ipv4(self.header).unwrap_or("");
        let hostname = lexer::extract_hostname(self.header).unwrap_or(UNKNOWN_HOSTNAME);

        let header_port = self.header_port.filter(|_| options.header_port_lines);
        let records: Vec<Record> = header_port
            .into_iter()
            .chain(self.ports)
            .map(|line| {
                Record::new(
                    ip,
                    hostname,
                    line.port,
                    line.proto,
                    line.state,
                    line.description,
                )
            })
            .collect();

        if !records.is_empty() {
            records
        } else if !ip.is_empty() {
            vec![Record::placeholder(ip, hostname)]
        } else {
            trace!(header = self.header, "block has no address and no ports");
            Vec::new()
        }
    }
}

/// Split the trimmed input into host blocks.
fn split_blocks(raw: &str) -> Vec<HostBlock<'_>> {
    let mut blocks: Vec<HostBlock<'_>> = Vec::new();

    for line in raw.trim().lines() {
        let kind = lexer::classify(line);
        if let Some(block) = blocks.last_mut() {
            match kind {
                LineKind::Port(port) => {
                    block.ports.push(port);
                    continue;
                }
                LineKind::Other => continue,
                LineKind::Header => {}
            }
        }
        blocks.push(HostBlock::new(line, kind));
    }

    blocks
}

/// Parse a scan report with default options.
pub fn parse(raw: &str) -> Vec<Record> {
    parse_with(raw, &ParseOptions::default())
}

/// Parse a scan report.
///
/// Records come out in input order: block by block, and row by row within
/// a block.
pub fn parse_with(raw: &str, options: &ParseOptions) -> Vec<Record> {
    let blocks = split_blocks(raw);
    let block_count = blocks.len();

    let records: Vec<Record> = blocks
        .into_iter()
        .flat_map(|block| block.into_records(options))
        .collect();

    debug!(
        blocks = block_count,
        records = records.len(),
        placeholders = records.iter().filter(|r| r.is_placeholder()).count(),
        "parsed scan report"
    );
    records
}
