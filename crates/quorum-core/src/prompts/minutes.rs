//! Minutes-summary prompt: turn captured meeting notes into a board-ready digest.

/// Template: placeholder is replaced with the joined snippet text.
pub const MINUTES_SUMMARY_TEMPLATE: &str = r#"As an executive assistant to a board director, summarize these meeting notes.
Identify:
- Key Decisions
- Action Items (with owners if mentioned)
- Significant Dissenting Notes or Concerns Raised
- Next Steps

Notes: {notes}"#;

/// Build the summary prompt with the given notes.
pub fn minutes_summary_prompt(notes: &str) -> String {
    MINUTES_SUMMARY_TEMPLATE.replace("{notes}", notes)
}
