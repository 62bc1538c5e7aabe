// ABOUTME: Gemini API client for story expansion, suggestions, and storyboard synthesis

use crate::config::GeminiConfig;
use crate::gemini::types::{
    ApiErrorBody, GeminiAuth, GeminiError, GenerateContentRequest, GenerateContentResponse,
    StoryboardShot,
};
use reqwest::Client;
use tracing::{debug, warn};

/// Thin call boundary to the external generative service. Every operation is
/// a single best-effort request: no retry, no backoff, the client-level
/// timeout is the only deadline.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    auth: GeminiAuth,
    model: String,
}

impl GeminiClient {
    /// Build a client from the gateway section of the app config. The config
    /// file's key wins over the environment so saved setups stay portable.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let mut auth = GeminiAuth::default();
        if let Some(key) = &config.api_key {
            auth.api_key = Some(key.clone());
        }
        if let Some(url) = &config.base_url {
            auth.base_url = url.clone();
        }
        Self::with_auth(auth, config.model.clone(), config.timeout_secs)
    }

    pub fn with_auth(
        auth: GeminiAuth,
        model: String,
        timeout_secs: u64,
    ) -> Result<Self, GeminiError> {
        if !auth.is_configured() {
            return Err(GeminiError::MissingApiKey);
        }
        let client = Client::builder()
            .user_agent(concat!("dreamer/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            auth,
            model,
        })
    }

    /// Expand a free-form idea into an ordered list of scene summaries.
    pub async fn generate_story(&self, idea: &str) -> Result<Vec<String>, GeminiError> {
        let prompt = format!(
            "You are a film development assistant. Expand the following idea into \
             3 to 5 ordered scene summaries for a short cinematic sequence. \
             Answer with one scene per line, no numbering, no commentary.\n\nIdea: {idea}"
        );
        let text = self.generate_text(GenerateContentRequest::from_prompt(prompt)).await?;
        let scenes: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(ToString::to_string)
            .collect();
        if scenes.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(scenes)
    }

    /// One suggested answer for the current wizard step, given scene context.
    pub async fn inspiration(&self, context: &str, prompt: &str) -> Result<String, GeminiError> {
        let prompt = format!(
            "You are a cinematographer brainstorming for a director. {context}\n\
             Question: {prompt}\n\
             Answer with a single evocative suggestion, one sentence, no preamble."
        );
        self.generate_text(GenerateContentRequest::from_prompt(prompt)).await
    }

    /// A small list of suggested answers for the current wizard step.
    pub async fn suggestions(
        &self,
        context: &str,
        prompt: &str,
        limit: usize,
    ) -> Result<Vec<String>, GeminiError> {
        let prompt = format!(
            "You are a cinematographer brainstorming for a director. {context}\n\
             Question: {prompt}\n\
             Offer {limit} distinct suggestions, one per line, no numbering, no commentary."
        );
        let text = self.generate_text(GenerateContentRequest::from_prompt(prompt)).await?;
        let suggestions: Vec<String> = text
            .lines()
            .map(|l| l.trim().trim_start_matches(['-', '*', ' ']).to_string())
            .filter(|l| !l.is_empty())
            .take(limit)
            .collect();
        if suggestions.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(suggestions)
    }

    /// Break a script down into an ordered list of storyboard shots.
    pub async fn storyboard(&self, script: &str) -> Result<Vec<StoryboardShot>, GeminiError> {
        let prompt = format!(
            "Break the following script into a storyboard. Respond with a JSON array; \
             each element has the shape {{\"screenplayLine\": string, \"shotDetails\": \
             {{\"shotType\": string, \"cameraAngle\": string, \"description\": string, \
             \"lightingMood\": string, \"cameraMovement\": string}}}}. \
             Respond with JSON only.\n\nScript:\n{script}"
        );
        let request = GenerateContentRequest::from_prompt(prompt).expecting_json();
        let text = self.generate_text(request).await?;
        parse_storyboard_json(&text)
    }

    async fn generate_text(&self, request: GenerateContentRequest) -> Result<String, GeminiError> {
        let api_key = self.auth.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.auth.base_url, self.model
        );

        debug!(model = %self.model, "sending Gemini generateContent request");
        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.first_text().ok_or(GeminiError::EmptyResponse)
    }
}

/// Parse the model's storyboard output, tolerating markdown code fences
/// around the JSON array.
pub fn parse_storyboard_json(text: &str) -> Result<Vec<StoryboardShot>, GeminiError> {
    let stripped = strip_code_fences(text);
    serde_json::from_str(stripped).map_err(GeminiError::MalformedStoryboard)
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line if there is one, then the closing fence.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n']).trim_end_matches('`').trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHOT_JSON: &str = r#"[
        {
            "screenplayLine": "He edits reels of his past while rain combs the window.",
            "shotDetails": {
                "shotType": "close-up",
                "cameraAngle": "eye-level",
                "description": "Hands threading film, rain reflections on his face",
                "lightingMood": "tungsten haze",
                "cameraMovement": "slow dolly-in"
            }
        }
    ]"#;

    #[test]
    fn parses_bare_storyboard_json() {
        let shots = parse_storyboard_json(SHOT_JSON).unwrap();
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].shot_details.shot_type, "close-up");
        assert_eq!(shots[0].shot_details.camera_movement, "slow dolly-in");
    }

    #[test]
    fn parses_fenced_storyboard_json() {
        let fenced = format!("```json\n{SHOT_JSON}\n```");
        let shots = parse_storyboard_json(&fenced).unwrap();
        assert_eq!(shots.len(), 1);

        let fenced_no_tag = format!("```\n{SHOT_JSON}\n```");
        assert_eq!(parse_storyboard_json(&fenced_no_tag).unwrap().len(), 1);
    }

    #[test]
    fn malformed_storyboard_is_an_error() {
        let err = parse_storyboard_json("the model apologizes instead of answering").unwrap_err();
        assert!(matches!(err, GeminiError::MalformedStoryboard(_)));
    }

    #[test]
    fn first_text_joins_parts_and_rejects_blank() {
        use crate::gemini::types::{Candidate, Content, GenerateContentResponse, Part};

        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![
                        Part { text: "golden hour ".to_string() },
                        Part { text: "glow".to_string() },
                    ],
                },
            }],
        };
        assert_eq!(response.first_text(), Some("golden hour glow".to_string()));

        let blank = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![Part { text: "   ".to_string() }],
                },
            }],
        };
        assert_eq!(blank.first_text(), None);
    }

    #[test]
    fn missing_key_fails_at_build_time() {
        let auth = crate::gemini::types::GeminiAuth {
            api_key: None,
            base_url: crate::gemini::types::DEFAULT_BASE_URL.to_string(),
        };
        let err = GeminiClient::with_auth(auth, "gemini-1.5-flash".to_string(), 30).unwrap_err();
        assert!(matches!(err, GeminiError::MissingApiKey));
    }
}
