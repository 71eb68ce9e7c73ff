//! Session-scoped conversation store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::conversation::Conversation;

/// All conversations of one interactive session, keyed by persona id.
///
/// Owned by the caller and passed by reference into the chat flow; nothing
/// here is process-global. Switching personas switches to a distinct
/// conversation, so turns never leak between personas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    id: String,
    conversations: HashMap<String, Conversation>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            conversations: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn conversation(&self, persona_id: &str) -> Option<&Conversation> {
        self.conversations.get(persona_id)
    }

    /// Returns the persona's conversation, creating an empty one on first use.
    pub fn conversation_mut(&mut self, persona_id: &str) -> &mut Conversation {
        self.conversations
            .entry(persona_id.to_string())
            .or_insert_with(|| Conversation::new(persona_id))
    }

    /// Number of turns in the persona's conversation.
    pub fn turn_count(&self, persona_id: &str) -> usize {
        self.conversation(persona_id).map_or(0, Conversation::len)
    }

    /// Clears one persona's conversation. Other personas are untouched.
    pub fn reset(&mut self, persona_id: &str) {
        if let Some(conversation) = self.conversations.get_mut(persona_id) {
            conversation.clear();
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
