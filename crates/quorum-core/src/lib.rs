//! quorum-core: assistance core for the Independent-Director dashboard.
//!
//! Prompt templates, the Gemini gateway client, schema-constrained response
//! decoding, the track-record repository, and static demo content. Screen
//! controllers live in `quorum-shell` and depend only on the traits here.

mod config;
mod content;
mod error;
mod gateway;
mod schema;
mod store;
mod types;

pub mod prompts;

pub use config::UserConfig;
pub use content::{
    mock_news, news_for, StatCard, DASHBOARD_STATS, DEFAULT_TRANSCRIPT, LIVE_SNIPPET_POOL,
    SAMPLE_RESOLUTION,
};
pub use error::GatewayError;
pub use gateway::{AssistService, GeminiClient, MODEL_ANALYST, MODEL_SCRIBE};
pub use schema::{
    decode_resolution_analysis, resolution_analysis_schema, FieldKind, ResponseSchema,
};
pub use store::{MemoryTrackRecordStore, SledTrackRecordStore, StoreError, TrackRecordStore};
pub use types::{
    now_ms, MeetingSnippet, NewsCategory, NewsItem, ResolutionAnalysis, RiskLevel,
    TrackRecordItem,
};
