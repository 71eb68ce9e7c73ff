//! Per-persona conversation.

use serde::{Deserialize, Serialize};

use super::message::Turn;
use crate::document::UploadedDocument;

/// Lifecycle of a persona's conversation.
///
/// ```text
/// Empty -> AwaitingModel -> Responded | Failed
/// Responded | Failed -> AwaitingModel   (next user turn)
/// any -> Empty                          (clear)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationState {
    Empty,
    AwaitingModel,
    Responded,
    /// Last model call failed; the user turn that triggered it is kept
    Failed,
}

/// Ordered turn history for one persona within one session.
///
/// Append-only except for [`Conversation::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    persona_id: String,
    turns: Vec<Turn>,
    state: ConversationState,
    /// Upload waiting to open the conversation
    pending_document: Option<UploadedDocument>,
    /// Upload that opened the conversation, replayed in follow-up requests
    opening_document: Option<UploadedDocument>,
}

impl Conversation {
    pub fn new(persona_id: impl Into<String>) -> Self {
        Self {
            persona_id: persona_id.into(),
            turns: Vec::new(),
            state: ConversationState::Empty,
            pending_document: None,
            opening_document: None,
        }
    }

    pub fn persona_id(&self) -> &str {
        &self.persona_id
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Appends a user turn and moves to `AwaitingModel`.
    pub fn push_user(&mut self, content: impl Into<String>) -> &Turn {
        self.turns.push(Turn::user(content));
        self.state = ConversationState::AwaitingModel;
        &self.turns[self.turns.len() - 1]
    }

    /// Appends the model's reply and moves to `Responded`.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &Turn {
        self.turns.push(Turn::assistant(content));
        self.state = ConversationState::Responded;
        &self.turns[self.turns.len() - 1]
    }

    /// Records a failed model call. The user turn stays in place.
    pub fn mark_failed(&mut self) {
        self.state = ConversationState::Failed;
    }

    /// Replaces the history with the empty sequence and forgets any upload.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.pending_document = None;
        self.opening_document = None;
        self.state = ConversationState::Empty;
    }

    pub fn attach_document(&mut self, document: UploadedDocument) {
        self.pending_document = Some(document);
    }

    pub fn pending_document(&self) -> Option<&UploadedDocument> {
        self.pending_document.as_ref()
    }

    pub fn opening_document(&self) -> Option<&UploadedDocument> {
        self.opening_document.as_ref()
    }

    /// Moves the pending upload into the opening slot.
    ///
    /// Returns `None` unless the conversation is empty and an upload is
    /// pending, which makes the opening fire at most once per lifetime.
    pub fn take_pending_for_opening(&mut self) -> Option<&UploadedDocument> {
        if !self.is_empty() {
            return None;
        }
        let document = self.pending_document.take()?;
        self.opening_document = Some(document);
        self.opening_document.as_ref()
    }
}
