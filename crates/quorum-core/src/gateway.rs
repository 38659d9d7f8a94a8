//! Gemini gateway: one request/response exchange per assistance action.
//!
//! Thin by intent: no retries, no caching, no backoff. Every screen action
//! maps to exactly one outbound `generateContent` call; failures surface to
//! the caller as `GatewayError` and stop there.
//!
//! API key: `GEMINI_API_KEY` in `.env`, or `user_config.toml` (config wins).

use crate::config::UserConfig;
use crate::error::GatewayError;
use crate::prompts;
use crate::schema::{self, ResponseSchema};
use crate::types::{ResolutionAnalysis, TrackRecordItem};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Deep-analysis model (resolution analysis, track-record summary).
pub const MODEL_ANALYST: &str = "gemini-3-pro-preview";
/// Fast model (minutes summarization).
pub const MODEL_SCRIBE: &str = "gemini-3-flash-preview";

// Gemini generateContent request/response wire shapes.
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// The three assistance calls the screens depend on. Behind a trait so the
/// shell is testable without the network.
#[async_trait]
pub trait AssistService: Send + Sync {
    /// Fiduciary analysis of one resolution text (schema-constrained).
    async fn analyze_resolution(&self, text: &str) -> Result<ResolutionAnalysis, GatewayError>;

    /// Free-text digest of captured meeting notes.
    async fn summarize_minutes(&self, notes: &str) -> Result<String, GatewayError>;

    /// Free-text annual-report summary over the full impact log.
    async fn summarize_track_record(
        &self,
        items: &[TrackRecordItem],
    ) -> Result<String, GatewayError>;
}

/// Gemini-backed `AssistService`.
pub struct GeminiClient {
    api_key: String,
    analyst_model: String,
    scribe_model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client using the key from `user_config.toml`, falling back to
    /// the `GEMINI_API_KEY` environment variable. Model overrides from the
    /// config are applied; unset fields keep the module defaults.
    pub fn from_env() -> Result<Self, GatewayError> {
        let config = UserConfig::load().unwrap_or_default();
        let api_key = config
            .api_key()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(GatewayError::MissingApiKey)?;
        Ok(Self::new(api_key).with_overrides(&config))
    }

    /// Create a client with an explicit API key and the default models.
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            analyst_model: MODEL_ANALYST.to_string(),
            scribe_model: MODEL_SCRIBE.to_string(),
            client,
        }
    }

    /// Apply model overrides from the user config.
    pub fn with_overrides(mut self, config: &UserConfig) -> Self {
        if let Some(model) = &config.analyst_model {
            self.analyst_model = model.clone();
        }
        if let Some(model) = &config.scribe_model {
            self.scribe_model = model.clone();
        }
        self
    }

    /// Model used for resolution analysis and track-record summaries.
    pub fn analyst_model(&self) -> &str {
        &self.analyst_model
    }

    /// Model used for minutes summarization.
    pub fn scribe_model(&self) -> &str {
        &self.scribe_model
    }

    /// One generateContent exchange. With a schema the provider is asked for
    /// `application/json` constrained to that shape; without one the raw text
    /// is returned unchanged, including empty.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        response_schema: Option<&ResponseSchema>,
    ) -> Result<String, GatewayError> {
        let url = format!("{GEMINI_API_BASE}/models/{model}:generateContent");
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: response_schema.map(|s| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: s.to_wire(),
            }),
        };

        tracing::debug!(model, schema = response_schema.is_some(), "generateContent");
        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status, "Gemini API error");
            return Err(GatewayError::Api { status, body });
        }

        let parsed: GenerateResponse = res.json().await?;
        let text = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();
        Ok(text)
    }
}

#[async_trait]
impl AssistService for GeminiClient {
    async fn analyze_resolution(&self, text: &str) -> Result<ResolutionAnalysis, GatewayError> {
        if text.trim().is_empty() {
            return Err(GatewayError::MissingInput("resolution text"));
        }
        let prompt = prompts::resolution_analysis_prompt(text);
        let schema = schema::resolution_analysis_schema();
        let raw = self
            .generate(&self.analyst_model, &prompt, Some(&schema))
            .await?;
        schema::decode_resolution_analysis(&raw)
    }

    async fn summarize_minutes(&self, notes: &str) -> Result<String, GatewayError> {
        if notes.trim().is_empty() {
            return Err(GatewayError::MissingInput("meeting notes"));
        }
        let prompt = prompts::minutes_summary_prompt(notes);
        self.generate(&self.scribe_model, &prompt, None).await
    }

    async fn summarize_track_record(
        &self,
        items: &[TrackRecordItem],
    ) -> Result<String, GatewayError> {
        if items.is_empty() {
            return Err(GatewayError::MissingInput("track record entries"));
        }
        let prompt = prompts::track_record_summary_prompt(items);
        self.generate(&self.analyst_model, &prompt, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::resolution_analysis_schema;

    #[test]
    fn request_body_carries_schema_when_declared() {
        let schema = resolution_analysis_schema();
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "analyze this".into(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema.to_wire(),
            }),
        };
        let wire = serde_json::to_value(&body).unwrap();
        assert_eq!(wire["contents"][0]["parts"][0]["text"], "analyze this");
        assert_eq!(
            wire["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(wire["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn request_body_omits_generation_config_in_free_text_mode() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "summarize".into(),
                }],
            }],
            generation_config: None,
        };
        let wire = serde_json::to_value(&body).unwrap();
        assert!(wire.get("generationConfig").is_none());
    }

    #[test]
    fn response_text_joins_candidate_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Key "},{"text":"Decisions"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Key Decisions");
    }

    #[test]
    fn client_defaults_to_module_models() {
        let client = GeminiClient::new("test-key".into());
        assert_eq!(client.analyst_model(), MODEL_ANALYST);
        assert_eq!(client.scribe_model(), MODEL_SCRIBE);
    }

    #[test]
    fn config_overrides_replace_only_the_set_models() {
        let config = UserConfig {
            api_key: None,
            analyst_model: Some("gemini-3-ultra".into()),
            scribe_model: None,
        };
        let client = GeminiClient::new("test-key".into()).with_overrides(&config);
        assert_eq!(client.analyst_model(), "gemini-3-ultra");
        assert_eq!(client.scribe_model(), MODEL_SCRIBE);
    }

    #[test]
    fn empty_candidate_list_yields_empty_text() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
