use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_SEARCH_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_search_model() -> String {
    DEFAULT_SEARCH_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_knowledge_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

/// Application configuration (`config.toml`).
///
/// Every field has a default, so a missing file or an empty table is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Model used for persona replies
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Directory containing the knowledge directories
    #[serde(default = "default_knowledge_root")]
    pub knowledge_root: PathBuf,
    #[serde(default)]
    pub search: SearchConfig,
    /// Persona selected at start-up
    #[serde(default)]
    pub default_persona: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Model used for grounded web search
    #[serde(default = "default_search_model")]
    pub model: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_search_model(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            knowledge_root: default_knowledge_root(),
            search: SearchConfig::default(),
            default_persona: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.model, "gemini-2.0-flash");
        assert!(config.search.enabled);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
            model = "gemini-2.5-pro"
            knowledge_root = "/srv/agentcoach"
            default_persona = "Bob"

            [search]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.knowledge_root, PathBuf::from("/srv/agentcoach"));
        assert_eq!(config.default_persona.as_deref(), Some("Bob"));
        assert!(!config.search.enabled);
        assert_eq!(config.search.model, DEFAULT_SEARCH_MODEL);
        assert_eq!(config.api_key_env, DEFAULT_API_KEY_ENV);
    }
}
