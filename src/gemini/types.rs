// ABOUTME: Type definitions for the Gemini generateContent API surface

use serde::{Deserialize, Serialize};

/// Failure taxonomy for gateway calls. Every call is attempt-once; callers
/// surface these to the display layer without retrying.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini client requires an API key. Set GEMINI_API_KEY or add one to the config file.")]
    MissingApiKey,
    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("request to Gemini API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini response contained no text candidates")]
    EmptyResponse,
    #[error("could not parse storyboard JSON from model output: {0}")]
    MalformedStoryboard(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

impl GenerateContentRequest {
    /// Single-turn user prompt with the default sampling settings.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.9),
                max_output_tokens: Some(2048),
                response_mime_type: None,
            }),
        }
    }

    /// Ask the model to answer with raw JSON instead of prose.
    pub fn expecting_json(mut self) -> Self {
        if let Some(config) = self.generation_config.as_mut() {
            config.response_mime_type = Some("application/json".to_string());
        }
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Text of the first candidate, trimmed. `None` when the model returned
    /// nothing usable.
    pub fn first_text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// One AI-produced breakdown unit mapping a line of script to
/// cinematographic parameters. Opaque to the rest of the app; displayed
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardShot {
    #[serde(rename = "screenplayLine")]
    pub screenplay_line: String,
    #[serde(rename = "shotDetails")]
    pub shot_details: ShotDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotDetails {
    #[serde(rename = "shotType")]
    pub shot_type: String,
    #[serde(rename = "cameraAngle")]
    pub camera_angle: String,
    pub description: String,
    #[serde(rename = "lightingMood")]
    pub lighting_mood: String,
    #[serde(rename = "cameraMovement")]
    pub camera_movement: String,
}

/// Authentication configuration for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiAuth {
    pub api_key: Option<String>,
    pub base_url: String,
}

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

impl Default for GeminiAuth {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeminiAuth {
    pub fn from_api_key(api_key: String) -> Self {
        Self {
            api_key: Some(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
