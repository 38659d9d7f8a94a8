//! Track-record summary prompt: impact logs → annual-report governance prose.

use crate::types::TrackRecordItem;

/// Template: placeholder is replaced with the serialized impact logs.
pub const TRACK_RECORD_SUMMARY_TEMPLATE: &str = r#"Convert the following impact logs of an Independent Director into a professional, executive summary suitable for a Corporate Governance section of an Annual Report. Focus on oversight, fiduciary duty, and stakeholder value.

Impact Logs: {logs}"#;

/// Build the summary prompt over the full record list, serialized as JSON.
///
/// Serialization of plain data types does not fail; an empty list yields
/// `[]`, which callers are expected to gate on before sending.
pub fn track_record_summary_prompt(items: &[TrackRecordItem]) -> String {
    let logs = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());
    TRACK_RECORD_SUMMARY_TEMPLATE.replace("{logs}", &logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_serialized_items() {
        let items = vec![TrackRecordItem::new(
            "Acme Industries",
            "Pushed for independent valuation of RPT",
            "Governance",
        )];
        let prompt = track_record_summary_prompt(&items);
        assert!(prompt.contains("Acme Industries"));
        assert!(prompt.contains("\"impact\":"));
    }

    #[test]
    fn empty_list_serializes_to_empty_array() {
        let prompt = track_record_summary_prompt(&[]);
        assert!(prompt.contains("Impact Logs: []"));
    }
}
