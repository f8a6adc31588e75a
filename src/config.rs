//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// JSON job catalog to load instead of the bundled one
    pub jobs_file: Option<PathBuf>,
    /// Dialing code preselected on the sign-up form
    pub default_country: Option<String>,
    /// Start with password fields revealed
    pub show_password_by_default: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "bidboard", "bidboard-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::from_json(&content);
            }
        }

        Ok(Self::default())
    }

    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn show_password(&self) -> bool {
        self.show_password_by_default.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.jobs_file.is_none());
        assert!(config.default_country.is_none());
        assert!(config.show_password_by_default.is_none());
        assert!(!config.show_password());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            jobs_file: Some(PathBuf::from("/tmp/jobs.json")),
            default_country: Some("+62".to_string()),
            show_password_by_default: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed = TuiConfig::from_json(&json).unwrap();

        assert_eq!(parsed.jobs_file, Some(PathBuf::from("/tmp/jobs.json")));
        assert_eq!(parsed.default_country, Some("+62".to_string()));
        assert!(parsed.show_password());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed = TuiConfig::from_json("{}").unwrap();
        assert!(parsed.default_country.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"default_country": "+61", "unknown_field": "value"}"#;
        let parsed = TuiConfig::from_json(json).unwrap();
        assert_eq!(parsed.default_country, Some("+61".to_string()));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TuiConfig::from_json("{").is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
        let _dir = TuiConfig::log_dir();
    }
}
