// ABOUTME: Named snapshots of a wizard answer record, persisted as JSON

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// A named snapshot of the wizard's answer record. The live session stays
/// in memory only; saving is an explicit user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedConfiguration {
    pub id: Uuid,
    pub name: String,
    pub answers: HashMap<String, String>,
    pub saved_at: DateTime<Utc>,
}

impl SavedConfiguration {
    pub fn new(name: String, answers: HashMap<String, String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            answers,
            saved_at: Utc::now(),
        }
    }
}

/// JSON-file store for saved configurations, one file per snapshot.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn save(&self, config: &SavedConfiguration) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.dir.join(format!("{}.json", config.id));
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// All saved configurations, newest first. Files that fail to parse are
    /// skipped rather than failing the whole listing.
    pub fn list(&self) -> Result<Vec<SavedConfiguration>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut configs = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read {}", self.dir.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|s| serde_json::from_str(&s).map_err(Into::into))
            {
                Ok(config) => configs.push(config),
                Err(e) => tracing::warn!("Skipping unreadable config {}: {e}", path.display()),
            }
        }
        configs.sort_by(|a: &SavedConfiguration, b: &SavedConfiguration| {
            b.saved_at.cmp(&a.saved_at)
        });
        Ok(configs)
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let path = self.dir.join(format!("{id}.json"));
        fs::remove_file(&path).with_context(|| format!("Failed to delete {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (ConfigStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("dreamer-test-{}", Uuid::new_v4()));
        (ConfigStore::new(dir.clone()), dir)
    }

    #[test]
    fn save_then_list_round_trips() {
        let (store, dir) = temp_store();
        let mut answers = HashMap::new();
        answers.insert("emotion".to_string(), "melancholic".to_string());
        let config = SavedConfiguration::new("rain study".to_string(), answers);

        store.save(&config).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "rain study");
        assert_eq!(listed[0].answers.get("emotion").map(String::as_str), Some("melancholic"));

        store.delete(config.id).unwrap();
        assert!(store.list().unwrap().is_empty());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn listing_a_missing_directory_is_empty() {
        let (store, _dir) = temp_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn unparsable_files_are_skipped() {
        let (store, dir) = temp_store();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("junk.json"), "not json").unwrap();

        let config = SavedConfiguration::new("valid".to_string(), HashMap::new());
        store.save(&config).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "valid");
        let _ = fs::remove_dir_all(dir);
    }
}
