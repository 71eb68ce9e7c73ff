//! Loads `config.toml`.

use std::path::{Path, PathBuf};

use agentcoach_core::config::AppConfig;
use agentcoach_core::error::{CoachError, Result};

use crate::paths::AgentCoachPaths;

/// Reads the application configuration from a TOML file.
///
/// A missing file yields the defaults; a file that exists but does not
/// parse is a configuration error.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the default path (`~/.config/agentcoach/config.toml`).
    pub fn new() -> Result<Self> {
        let path = AgentCoachPaths::config_file().map_err(|e| CoachError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Uses a custom path (CLI override, tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            CoachError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "model = \"gemini-2.5-flash\"\n[search]\nenabled = false\n").unwrap();

        let config = ConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(!config.search.enabled);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "model = [unterminated").unwrap();

        let err = ConfigService::with_path(&path).load().unwrap_err();
        assert!(err.is_config());
    }
}
