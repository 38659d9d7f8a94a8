//! Prompt templates for the three assistance tasks.
//!
//! Pure string construction: the user text is embedded verbatim, no escaping
//! and no length limits. Callers check for empty input before sending.

pub mod minutes;
pub mod resolution;
pub mod track_record;

pub use minutes::{minutes_summary_prompt, MINUTES_SUMMARY_TEMPLATE};
pub use resolution::{resolution_analysis_prompt, RESOLUTION_ANALYSIS_TEMPLATE};
pub use track_record::{track_record_summary_prompt, TRACK_RECORD_SUMMARY_TEMPLATE};
