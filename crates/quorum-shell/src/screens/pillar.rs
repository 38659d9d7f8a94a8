//! Static briefing screens: the dashboard overview and the three news pillars.
//!
//! No gateway calls here; content is bound once at construction.

use crate::app::AppTab;
use quorum_core::{news_for, NewsCategory, NewsItem, StatCard, DASHBOARD_STATS};

/// One pillar tab (CG / ESG / TECH) with its filtered briefings.
pub struct PillarScreen {
    category: NewsCategory,
    items: Vec<NewsItem>,
}

impl PillarScreen {
    pub fn new(category: NewsCategory) -> Self {
        Self {
            category,
            items: news_for(category),
        }
    }

    /// The pillar behind a navigation tab; `None` for non-pillar tabs.
    pub fn for_tab(tab: AppTab) -> Option<Self> {
        let category = match tab {
            AppTab::Governance => NewsCategory::Governance,
            AppTab::Esg => NewsCategory::Esg,
            AppTab::Tech => NewsCategory::Tech,
            _ => return None,
        };
        Some(Self::new(category))
    }

    pub fn category(&self) -> NewsCategory {
        self.category
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }
}

/// Dashboard overview: static stat cards only.
pub struct DashboardOverview;

impl DashboardOverview {
    pub fn stat_cards() -> &'static [StatCard] {
        &DASHBOARD_STATS
    }
}
