// ABOUTME: CLI storyboard command - break a script into storyboard shots

use super::{OutputFormat, StoryboardArgs};
use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use anyhow::{bail, Context, Result};
use std::io::Read;

/// Execute the storyboard command. The script comes from `--script FILE` or,
/// when absent, from stdin.
pub async fn execute(args: StoryboardArgs, format: OutputFormat) -> Result<()> {
    let script = match args.script {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read script from stdin")?;
            buffer
        }
    };
    if script.trim().is_empty() {
        bail!("script is empty; pass --script FILE or pipe text on stdin");
    }

    let config = AppConfig::load()?;
    let client =
        GeminiClient::from_config(&config.gemini).context("Gemini gateway unavailable")?;

    let shots = client
        .storyboard(&script)
        .await
        .context("storyboard generation failed")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&shots)?);
        }
        OutputFormat::Text => {
            for (i, shot) in shots.iter().enumerate() {
                println!("Shot {}", i + 1);
                println!("  Line:      {}", shot.screenplay_line);
                println!("  Type:      {}", shot.shot_details.shot_type);
                println!("  Angle:     {}", shot.shot_details.camera_angle);
                println!("  Movement:  {}", shot.shot_details.camera_movement);
                println!("  Lighting:  {}", shot.shot_details.lighting_mood);
                println!("  {}", shot.shot_details.description);
                println!();
            }
        }
    }
    Ok(())
}
