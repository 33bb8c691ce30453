//! JSON output formatting.

use crate::error::ReportResult;
use crate::types::Record;

/// Render sorted records as a pretty-printed JSON array.
pub fn to_json(records: &[Record]) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fields() {
        let records = vec![Record::placeholder("192.168.1.1", "unknown")];
        let json = to_json(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["ip"], "192.168.1.1");
        assert_eq!(value[0]["hostname"], "unknown");
        assert_eq!(value[0]["port"], "-");
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
