// ABOUTME: Configuration management for dreamer
// Handles the gateway settings, UI preferences, and on-disk locations

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version that wrote this file
    #[serde(default = "default_version")]
    pub version: String,

    /// Gateway settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model identifier passed to the generateContent endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the API base URL; defaults to the public endpoint
    pub base_url: Option<String>,

    /// HTTP client timeout in seconds; the only deadline enforced per call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API key; overrides the GEMINI_API_KEY environment variable when set
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Show the numeric percent next to the wizard progress bar
    #[serde(default = "default_true")]
    pub show_progress_percent: bool,

    /// How many suggestions to request from the gateway
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_progress_percent: default_true(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_suggestion_limit() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            gemini: GeminiConfig::default(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.dreamer/config/config.toml`, falling back
    /// to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::user_config_dir()?.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))
    }

    /// Save configuration to the user config directory.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::user_config_dir()?;
        fs::create_dir_all(&config_dir)?;
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    fn user_config_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("config"))
    }

    /// Root directory for all dreamer state (`~/.dreamer`).
    pub fn data_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".dreamer"))
    }

    /// Directory where named answer-record configurations are stored.
    pub fn saved_configs_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("configs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.timeout_secs, 60);
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.ui_preferences.suggestion_limit, 4);
        assert!(config.ui_preferences.show_progress_percent);
    }

    #[test]
    fn partial_config_round_trips() {
        let config: AppConfig = toml::from_str(
            r#"
            [gemini]
            model = "gemini-1.5-pro"
            timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.timeout_secs, 15);

        let rendered = toml::to_string_pretty(&config).unwrap();
        let reparsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(reparsed.gemini.model, "gemini-1.5-pro");
    }
}
