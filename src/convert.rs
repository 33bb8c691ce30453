//! End-to-end conversion of a scan report into output text.
//!
//! Parsing, sorting and rendering all finish before the caller writes
//! anything, so a report that fails to sort never produces a partial table.

use crate::error::ReportResult;
use crate::output::{self, OutputFormat};
use crate::parser::{self, ParseOptions};
use crate::types::IpPolicy;
use tracing::{debug, warn};

/// Everything that controls a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub parse: ParseOptions,
    pub ip_policy: IpPolicy,
    /// Insert a blank line between address groups.
    pub group_separator: bool,
    pub format: OutputFormat,
    /// Quote CSV fields instead of joining them verbatim.
    pub quote: bool,
}

impl ConvertOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Separate address groups with blank lines.
    pub fn with_group_separator(mut self) -> Self {
        self.group_separator = true;
        self
    }

    /// Set the address validation policy.
    pub fn with_ip_policy(mut self, policy: IpPolicy) -> Self {
        self.ip_policy = policy;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Quote CSV fields.
    pub fn with_quotes(mut self) -> Self {
        self.quote = true;
        self
    }

    /// Set the parser options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }
}

/// Convert a raw scan report into newline-terminated output text.
pub fn convert(raw: &str, options: &ConvertOptions) -> ReportResult<String> {
    let records = parser::parse_with(raw, &options.parse);
    let records = output::sort_records(records, options.ip_policy)?;
    debug!(
        records = records.len(),
        policy = %options.ip_policy,
        format = %options.format,
        "sorted records"
    );

    let lines = match options.format {
        OutputFormat::Csv if options.quote => output::quoted_lines(&records, options.group_separator)?,
        OutputFormat::Csv => output::format_lines(&records, options.group_separator),
        OutputFormat::Json => {
            if options.group_separator {
                warn!("group separators do not apply to JSON output; ignoring");
            }
            if options.quote {
                warn!("quoting does not apply to JSON output; ignoring");
            }
            vec![output::to_json(&records)?]
        }
    };

    Ok(lines.into_iter().map(|line| line + "\n").collect())
}
