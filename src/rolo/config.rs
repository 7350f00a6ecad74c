use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, RoloError};

const CONFIG_FILENAME: &str = "config.json";

/// How the list screen orders contacts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Insertion order; ids are monotonic.
    #[default]
    Id,
    Name,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Id => write!(f, "id"),
            SortBy::Name => write!(f, "name"),
        }
    }
}

/// Configuration for rolo, stored in the data dir as config.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    #[serde(default)]
    pub sort_by: SortBy,
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RoloConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Apply a `key value` pair from the config command.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sort_by" | "sort" => {
                self.sort_by = match value {
                    "id" => SortBy::Id,
                    "name" => SortBy::Name,
                    other => {
                        return Err(RoloError::Validation(format!(
                            "Invalid sort order: {} (expected id or name)",
                            other
                        )))
                    }
                };
                Ok(())
            }
            other => Err(RoloError::Validation(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.sort_by, SortBy::Id);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = RoloConfig::default();
        config.set("sort_by", "name").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.sort_by, SortBy::Name);
    }

    #[test]
    fn test_set_rejects_unknown_keys_and_values() {
        let mut config = RoloConfig::default();
        assert!(config.set("sort_by", "height").is_err());
        assert!(config.set("color", "blue").is_err());
    }
}
