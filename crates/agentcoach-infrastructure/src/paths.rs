//! Path management for agentcoach configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/agentcoach/        # Config directory (platform config dir)
//! └── config.toml              # Application configuration
//!
//! <knowledge_root>/            # Configurable, defaults to the working dir
//! ├── knowledge_base/          # Coaching material (.txt / .md / .pdf)
//! └── contracts_kb/            # Contract forms and notes
//! ```

use std::path::{Path, PathBuf};

use agentcoach_core::knowledge::KnowledgeBase;

const APP_DIR: &str = "agentcoach";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct AgentCoachPaths;

impl AgentCoachPaths {
    /// Returns `~/.config/agentcoach` (or the platform equivalent).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the default `config.toml` location.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Resolves a knowledge directory under `root`.
    pub fn knowledge_dir(root: &Path, base: KnowledgeBase) -> PathBuf {
        root.join(base.dir_name())
    }
}
