//! Resolution Resolver: paste a resolution, run fiduciary analysis.

use crate::state::ScreenState;
use quorum_core::{AssistService, GatewayError, ResolutionAnalysis, SAMPLE_RESOLUTION};
use tracing::error;

/// Headless controller for the resolver screen.
#[derive(Default)]
pub struct ResolutionResolver {
    input: String,
    state: ScreenState<ResolutionAnalysis>,
    /// Generic alert line shown after a failed analysis.
    alert: Option<&'static str>,
}

impl ResolutionResolver {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: ScreenState::Idle,
            alert: None,
        }
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// "Load Sample" action.
    pub fn load_sample(&mut self) {
        self.input = SAMPLE_RESOLUTION.to_string();
    }

    pub fn state(&self) -> &ScreenState<ResolutionAnalysis> {
        &self.state
    }

    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    /// Trigger is enabled only with non-empty input and no in-flight call.
    pub fn can_analyze(&self) -> bool {
        !self.input.trim().is_empty() && !self.state.is_loading()
    }

    /// First half of the analyze action: transitions to `Loading` and hands
    /// back the text to send. `None` when the trigger is disabled (empty
    /// input, or already loading).
    pub fn begin_analysis(&mut self) -> Option<String> {
        if !self.can_analyze() {
            return None;
        }
        self.alert = None;
        self.state = ScreenState::Loading;
        Some(self.input.clone())
    }

    /// Second half: settle the in-flight call. Failures are reduced to a log
    /// line plus a generic alert; no partial result reaches `Ready`.
    pub fn complete_analysis(&mut self, result: Result<ResolutionAnalysis, GatewayError>) {
        match result {
            Ok(analysis) => self.state = ScreenState::Ready(analysis),
            Err(e) => {
                error!("Analysis failed: {e}");
                self.alert = Some("Failed to analyze the resolution. Please try again.");
                self.state = ScreenState::Errored;
            }
        }
    }

    /// Full user action: no-op when the trigger is disabled.
    pub async fn analyze(&mut self, service: &dyn AssistService) {
        let Some(text) = self.begin_analysis() else {
            return;
        };
        let result = service.analyze_resolution(&text).await;
        self.complete_analysis(result);
    }
}
