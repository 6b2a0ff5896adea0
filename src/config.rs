//! Configuration handling for the admin client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the admin client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    /// Forms API base URL
    pub api_base: Option<String>,
    /// Form to open on startup
    pub form_id: Option<String>,
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formbuilder", "formbuilder-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: BuilderConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert!(config.api_base.is_none());
        assert!(config.form_id.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = BuilderConfig {
            api_base: Some("http://forms.example".to_string()),
            form_id: Some("CF1".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: BuilderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base, Some("http://forms.example".to_string()));
        assert_eq!(parsed.form_id, Some("CF1".to_string()));
    }

    #[test]
    fn test_partial_serialization() {
        let config = BuilderConfig {
            form_id: Some("CF1".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: BuilderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.form_id, Some("CF1".to_string()));
        assert!(parsed.api_base.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: BuilderConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.form_id.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"form_id": "CF1", "unknown_field": "value"}"#;
        let parsed: BuilderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.form_id, Some("CF1".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = BuilderConfig::load();
        assert!(result.is_ok());
    }
}
