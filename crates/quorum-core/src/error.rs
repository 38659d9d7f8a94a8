//! Gateway error surface. Every failure class the screens can observe.

use thiserror::Error;

/// Failure modes of one generate-content exchange.
///
/// Nothing here is retried internally; the screen boundary decides what to
/// show (usually nothing beyond a log line).
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The network exchange could not complete.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Structured output could not be parsed against the declared schema.
    #[error("schema decode failed: {0}")]
    Decode(String),

    /// Precondition not met before the call (empty input, empty record list).
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// No API credential available from config or environment.
    #[error("no API key configured (set GEMINI_API_KEY or user_config.toml)")]
    MissingApiKey,
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Decode(e.to_string())
    }
}
