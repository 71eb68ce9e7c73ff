//! Background knowledge directories.
//!
//! Knowledge text is advisory context appended to a persona's instructions.
//! It is re-read on every turn; nothing is cached.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The well-known knowledge directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KnowledgeBase {
    /// Coaching scripts, playbooks and productivity material
    Coaching,
    /// Contract forms, addenda and compliance notes
    Contracts,
}

impl KnowledgeBase {
    /// Directory name under the configured knowledge root.
    pub fn dir_name(self) -> &'static str {
        match self {
            KnowledgeBase::Coaching => "knowledge_base",
            KnowledgeBase::Contracts => "contracts_kb",
        }
    }
}

/// Loads the concatenated text of a knowledge directory.
#[async_trait]
pub trait KnowledgeLoader: Send + Sync {
    /// Returns every readable file's text, or an empty string when the
    /// directory is missing. Never fails.
    async fn load(&self, base: KnowledgeBase) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_dir_names_are_distinct() {
        assert_eq!(KnowledgeBase::Coaching.dir_name(), "knowledge_base");
        assert_eq!(KnowledgeBase::Contracts.dir_name(), "contracts_kb");
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!(KnowledgeBase::from_str("contracts").unwrap(), KnowledgeBase::Contracts);
        assert_eq!(KnowledgeBase::Coaching.to_string(), "coaching");
    }
}
