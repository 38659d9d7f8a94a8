//! Static demo content: mock briefings, sample resolution, transcript pool.
//!
//! Everything here is presentational seed data; nothing is fetched.

use crate::types::{NewsCategory, NewsItem};

/// One static stat card on the dashboard overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
}

/// Dashboard overview cards (static demo figures).
pub const DASHBOARD_STATS: [StatCard; 4] = [
    StatCard {
        label: "Upcoming Boards",
        value: "3",
        sub: "Next: Oct 28 (Tech Ltd)",
    },
    StatCard {
        label: "Active Resolutions",
        value: "12",
        sub: "4 require high scrutiny",
    },
    StatCard {
        label: "Fiduciary Score",
        value: "98%",
        sub: "Based on activity history",
    },
    StatCard {
        label: "Peer Network",
        value: "240+",
        sub: "ID Community insights",
    },
];

/// Sample resolution loaded by the resolver screen's "Load Sample" action.
pub const SAMPLE_RESOLUTION: &str = "Board Resolution No. 102/2023: Proposed Capital Expenditure for New Manufacturing Facility in Pune. The management proposes an investment of INR 450 Crores for the establishment of a state-of-the-art EV battery assembly unit. Financing will be 60% through long-term debt and 40% through internal accruals. This aligns with the company's 2030 Sustainability Charter. The land acquisition is from a subsidiary of the parent group.";

/// Pool of mock live-transcription lines fed to the curator while recording.
pub const LIVE_SNIPPET_POOL: [&str; 5] = [
    "Chairman: Let's discuss the ESG report...",
    "CFO: The EBITDA margins are stable at 18%...",
    "ID 1: I have concerns regarding the acquisition debt...",
    "CS: The minutes of previous meeting are tabled.",
    "CEO: We expect the new plant to be operational by Q3.",
];

/// Fallback transcript when recording stopped before any snippet arrived.
pub const DEFAULT_TRANSCRIPT: &str = "Chairman discussed expansion plans. CFO reviewed financials. Board approved the quarterly reports with minor corrections to CSR allocation.";

/// Mock briefing entries for the pillar screens (CG / ESG / TECH).
pub fn mock_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".into(),
            title: "New SEBI Disclosure Norms for Related Party Transactions".into(),
            source: "Financial Express".into(),
            date: "2023-10-24".into(),
            category: NewsCategory::Governance,
            summary: "SEBI has tightened the norms for material RPTs, requiring prior approval from the audit committee.".into(),
            impact: "Directors must ensure rigorous scrutiny of all RPTs above threshold limits during the next board cycle.".into(),
        },
        NewsItem {
            id: "2".into(),
            title: "Global Trends in Scope 3 Emission Reporting".into(),
            source: "ESG Today".into(),
            date: "2023-10-22".into(),
            category: NewsCategory::Esg,
            summary: "Major institutional investors are now demanding full Scope 3 transparency across global supply chains.".into(),
            impact: "The board should inquire about current supply chain data capabilities and the cost of compliance.".into(),
        },
        NewsItem {
            id: "3".into(),
            title: "Cybersecurity Liability for Board Members".into(),
            source: "Tech Insights".into(),
            date: "2023-10-20".into(),
            category: NewsCategory::Tech,
            summary: "A new wave of litigation targets directors for failure of oversight in high-profile data breaches.".into(),
            impact: "Recommend a deep-dive session on the company's cyber resilience and insurance coverage.".into(),
        },
    ]
}

/// Briefing entries for one pillar.
pub fn news_for(category: NewsCategory) -> Vec<NewsItem> {
    mock_news()
        .into_iter()
        .filter(|n| n.category == category)
        .collect()
}
