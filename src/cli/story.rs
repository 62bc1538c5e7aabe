// ABOUTME: CLI story command - expand an idea into ordered scene summaries

use super::{OutputFormat, StoryArgs};
use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use anyhow::{Context, Result};

/// Execute the story command
pub async fn execute(args: StoryArgs, format: OutputFormat) -> Result<()> {
    let config = AppConfig::load()?;
    let client =
        GeminiClient::from_config(&config.gemini).context("Gemini gateway unavailable")?;

    let scenes = client
        .generate_story(&args.idea)
        .await
        .context("story expansion failed")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scenes)?);
        }
        OutputFormat::Text => {
            for (i, scene) in scenes.iter().enumerate() {
                println!("Scene {}: {scene}", i + 1);
            }
        }
    }
    Ok(())
}
