//! Shared types for the Quorum assistance layer (former geminiService consumers).

use serde::{Deserialize, Serialize};

/// Fiduciary risk grading returned by resolution analysis.
/// The decoder rejects anything outside these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Parse the provider's string form. Exact match only; no fuzzy mapping.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Structured fiduciary analysis of one board resolution.
/// Immutable after decode; owned by the requesting screen's transient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionAnalysis {
    /// Simplified title for the resolution.
    pub title: String,
    /// Benefits to stakeholders/company.
    pub pros: Vec<String>,
    /// Cons or potential risks.
    pub cons: Vec<String>,
    /// Suggested inquiries (questions to ask management).
    pub inquiries: Vec<String>,
    pub risk_level: RiskLevel,
    pub compliance_notes: String,
}

/// One logged contribution entry for an Independent Director.
/// Persisted in the track-record store; deleted by id, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecordItem {
    /// Time-derived unique id (ms since epoch at creation).
    pub id: String,
    /// Display date at creation (local, YYYY-MM-DD).
    pub date: String,
    pub company: String,
    pub impact: String,
    pub category: String,
}

impl TrackRecordItem {
    /// Build a new entry stamped with the current wall clock.
    pub fn new(company: &str, impact: &str, category: &str) -> Self {
        Self {
            id: now_ms().to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            company: company.to_string(),
            impact: impact.to_string(),
            category: category.to_string(),
        }
    }
}

/// A single structured transcript unit (who, what, when).
/// Reserved for a future live-transcription path; the curator currently
/// feeds plain snippet strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingSnippet {
    pub speaker: String,
    pub text: String,
    /// Seconds since recording start.
    pub timestamp: f64,
}

/// Briefing pillar for the static news screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsCategory {
    #[serde(rename = "CG")]
    Governance,
    #[serde(rename = "ESG")]
    Esg,
    #[serde(rename = "TECH")]
    Tech,
}

/// One mock briefing entry shown on the pillar screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub date: String,
    pub category: NewsCategory,
    pub summary: String,
    /// What the director should do with this item.
    pub impact: String,
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_parses_exact_values_only() {
        assert_eq!(RiskLevel::parse("Low"), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::parse("Medium"), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::parse("High"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::parse("high"), None);
        assert_eq!(RiskLevel::parse("Critical"), None);
        assert_eq!(RiskLevel::parse(""), None);
    }

    #[test]
    fn track_record_item_round_trips_through_json() {
        let item = TrackRecordItem::new("Tech Ltd", "Flagged RPT exposure", "Governance");
        let json = serde_json::to_string(&item).unwrap();
        let back: TrackRecordItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn news_category_uses_short_wire_names() {
        assert_eq!(serde_json::to_string(&NewsCategory::Governance).unwrap(), "\"CG\"");
        assert_eq!(serde_json::to_string(&NewsCategory::Esg).unwrap(), "\"ESG\"");
        assert_eq!(serde_json::to_string(&NewsCategory::Tech).unwrap(), "\"TECH\"");
    }
}
