//! quorum-shell: headless screen controllers for the director dashboard.
//!
//! Each screen is a small state machine (`Idle → Loading → Ready | Errored`)
//! over the `AssistService` trait from `quorum-core`; no rendering, no real
//! timers, no network in tests.

mod app;
mod feed;
mod screens;
mod state;

pub use app::{AppShell, AppTab, UserProfile};
pub use feed::{MockPoolFeed, ScriptedFeed, SnippetFeed};
pub use screens::{
    format_time, DashboardOverview, MinutesCurator, PillarScreen, ResolutionResolver,
    TrackRecordScreen,
};
pub use state::ScreenState;
