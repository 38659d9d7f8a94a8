//! Minutes Curator: mock recording session, then AI summarization on stop.
//!
//! The recording indicator is driven by injected ticks, not real timers;
//! each tick advances the elapsed counter by one second and polls the
//! snippet feed for a mock transcription line.

use crate::feed::SnippetFeed;
use crate::state::ScreenState;
use quorum_core::{AssistService, GatewayError, DEFAULT_TRANSCRIPT};
use std::collections::VecDeque;
use tracing::error;

/// Most recent snippets kept visible while recording.
const SNIPPET_WINDOW: usize = 5;

/// Headless controller for the curator screen.
#[derive(Default)]
pub struct MinutesCurator {
    recording: bool,
    elapsed_secs: u64,
    /// Newest first, capped at `SNIPPET_WINDOW`.
    snippets: VecDeque<String>,
    state: ScreenState<String>,
}

impl MinutesCurator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Visible snippet window, newest first.
    pub fn snippets(&self) -> impl Iterator<Item = &str> {
        self.snippets.iter().map(String::as_str)
    }

    pub fn state(&self) -> &ScreenState<String> {
        &self.state
    }

    pub fn start_recording(&mut self) {
        self.recording = true;
    }

    /// One recording second: advance the timer and poll the feed.
    /// Ignored when not recording.
    pub fn tick(&mut self, feed: &mut dyn SnippetFeed) {
        if !self.recording {
            return;
        }
        self.elapsed_secs += 1;
        if let Some(line) = feed.poll() {
            self.snippets.push_front(line.to_string());
            self.snippets.truncate(SNIPPET_WINDOW);
        }
    }

    /// First half of the stop action: end the recording, reset the timer,
    /// transition to `Loading`, and hand back the combined transcript.
    /// `None` when a summarization is already in flight.
    pub fn begin_summary(&mut self) -> Option<String> {
        if self.state.is_loading() {
            return None;
        }
        self.recording = false;
        self.elapsed_secs = 0;
        let joined = self
            .snippets
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        let transcript = if joined.is_empty() {
            DEFAULT_TRANSCRIPT.to_string()
        } else {
            joined
        };
        self.state = ScreenState::Loading;
        Some(transcript)
    }

    /// Second half: settle the summarization call.
    pub fn complete_summary(&mut self, result: Result<String, GatewayError>) {
        match result {
            Ok(summary) => self.state = ScreenState::Ready(summary),
            Err(e) => {
                error!("Minutes summarization failed: {e}");
                self.state = ScreenState::Errored;
            }
        }
    }

    /// Full stop action: end recording and summarize what was captured.
    pub async fn stop_and_summarize(&mut self, service: &dyn AssistService) {
        let Some(transcript) = self.begin_summary() else {
            return;
        };
        let result = service.summarize_minutes(&transcript).await;
        self.complete_summary(result);
    }
}

/// mm:ss display for the recording indicator.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
