// ABOUTME: CLI configs command - list saved prompt configurations

use super::OutputFormat;
use crate::config::AppConfig;
use crate::models::ConfigStore;
use anyhow::Result;

/// Execute the configs command
pub async fn execute(format: OutputFormat) -> Result<()> {
    let store = ConfigStore::new(AppConfig::saved_configs_dir()?);
    let configs = store.list()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&configs)?);
        }
        OutputFormat::Text => {
            if configs.is_empty() {
                println!("No saved configurations.");
                return Ok(());
            }
            for config in &configs {
                println!(
                    "{}  {}  ({} answers)  {}",
                    config.id,
                    config.saved_at.format("%Y-%m-%d %H:%M"),
                    config.answers.len(),
                    config.name
                );
            }
        }
    }
    Ok(())
}
