//! Track Record: repository-backed impact log plus annual-report summary.

use crate::state::ScreenState;
use quorum_core::{AssistService, GatewayError, TrackRecordItem, TrackRecordStore};
use std::sync::Arc;
use tracing::{error, warn};

/// Headless controller for the track-record screen. The list is read once at
/// mount and rewritten wholesale on every add/delete.
pub struct TrackRecordScreen {
    store: Arc<dyn TrackRecordStore>,
    items: Vec<TrackRecordItem>,
    summary: ScreenState<String>,
    // Form state.
    company: String,
    impact: String,
    category: String,
}

impl TrackRecordScreen {
    /// Mount the screen: load whatever the store holds. A corrupt or
    /// unreadable store degrades to an empty list with a log line.
    pub fn mount(store: Arc<dyn TrackRecordStore>) -> Self {
        let items = store.load_all().unwrap_or_else(|e| {
            warn!("Track record load failed, starting empty: {e}");
            Vec::new()
        });
        Self {
            store,
            items,
            summary: ScreenState::Idle,
            company: String::new(),
            impact: String::new(),
            category: "Governance".to_string(),
        }
    }

    pub fn items(&self) -> &[TrackRecordItem] {
        &self.items
    }

    pub fn summary(&self) -> &ScreenState<String> {
        &self.summary
    }

    pub fn set_company(&mut self, company: &str) {
        self.company = company.to_string();
    }

    pub fn set_impact(&mut self, impact: &str) {
        self.impact = impact.to_string();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    /// Add the form entry, newest first. No-op when company or impact is
    /// empty; clears the text fields (not the category) on success.
    pub fn add(&mut self) {
        if self.company.is_empty() || self.impact.is_empty() {
            return;
        }
        let item = TrackRecordItem::new(&self.company, &self.impact, &self.category);
        self.items.insert(0, item);
        self.persist();
        self.company.clear();
        self.impact.clear();
    }

    /// Delete by id. Removes exactly one entry when present (ids are unique
    /// by construction); no-op when absent.
    pub fn delete(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_all(&self.items) {
            error!("Track record save failed: {e}");
        }
    }

    /// Trigger is enabled only with a non-empty list and no in-flight call.
    pub fn can_generate_summary(&self) -> bool {
        !self.items.is_empty() && !self.summary.is_loading()
    }

    /// First half of the generate-summary action; `None` when disabled.
    pub fn begin_summary(&mut self) -> Option<Vec<TrackRecordItem>> {
        if !self.can_generate_summary() {
            return None;
        }
        self.summary = ScreenState::Loading;
        Some(self.items.clone())
    }

    /// Second half: settle the summary call.
    pub fn complete_summary(&mut self, result: Result<String, GatewayError>) {
        match result {
            Ok(text) => self.summary = ScreenState::Ready(text),
            Err(e) => {
                error!("Track record summary failed: {e}");
                self.summary = ScreenState::Errored;
            }
        }
    }

    /// Full generate-summary action: no-op on an empty list, exactly one
    /// outbound call otherwise.
    pub async fn generate_summary(&mut self, service: &dyn AssistService) {
        let Some(items) = self.begin_summary() else {
            return;
        };
        let result = service.summarize_track_record(&items).await;
        self.complete_summary(result);
    }
}
