//! Resolution-analysis prompt: evaluate one board resolution against a
//! fiduciary framework for an Independent Director.
//!
//! The structured shape of the answer is enforced separately by the response
//! schema (see `schema`); the template states the expected content.

/// Template: placeholder is replaced with the raw resolution text.
pub const RESOLUTION_ANALYSIS_TEMPLATE: &str = r#"Analyze the following board resolution text based on a fiduciary framework for an Independent Director.
Provide:
1. A simplified title for the resolution.
2. 3 Pros (benefits to stakeholders/company).
3. 3 Cons or Potential Risks.
4. 5 Specific Suggested Inquiries (questions to ask management).
5. Risk Level (Low, Medium, High).
6. A brief Compliance Note.

Resolution Text: {resolution}"#;

/// Build the analysis prompt with the given resolution text.
pub fn resolution_analysis_prompt(resolution_text: &str) -> String {
    RESOLUTION_ANALYSIS_TEMPLATE.replace("{resolution}", resolution_text)
}
