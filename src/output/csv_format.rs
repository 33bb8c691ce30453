//! Quoted CSV output.
//!
//! The default table joins fields with bare commas, which leaves service
//! descriptions containing commas ambiguous. This formatter quotes fields
//! the RFC 4180 way instead.

use super::{layout, Row};
use crate::error::ReportResult;
use crate::types::{Record, CSV_HEADER};

/// Render sorted records as quoted CSV lines.
pub fn quoted_lines(records: &[Record], group_separator: bool) -> ReportResult<Vec<String>> {
    layout(records, group_separator)
        .into_iter()
        .map(|row| match row {
            Row::Header => quote_fields(&CSV_HEADER),
            Row::Separator => Ok(String::new()),
            Row::Record(record) => quote_fields(&record.fields()),
        })
        .collect()
}

fn quote_fields(fields: &[&str]) -> ReportResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(fields)?;

    let mut bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(String::from_utf8(bytes)?)
}
