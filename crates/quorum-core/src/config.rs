//! User configuration: API credential and model overrides.
//!
//! Lookup order for the credential: `user_config.toml` first, then the
//! `GEMINI_API_KEY` environment variable (loaded from `.env` by the shell).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User-editable configuration file (`user_config.toml` beside the binary).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Personal Gemini API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Override for the deep-analysis model id.
    #[serde(default)]
    pub analyst_model: Option<String>,

    /// Override for the fast summarization model id.
    #[serde(default)]
    pub scribe_model: Option<String>,
}

impl UserConfig {
    /// Default path for the user configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("user_config.toml")
    }

    /// Load from the default path; a missing file is an empty config.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_path(&Self::default_path())
    }

    /// Load from a specific path; a missing file is an empty config.
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: UserConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save to a specific path, creating parent directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Configured API key, trimmed; `None` when unset or blank.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
    }
}
