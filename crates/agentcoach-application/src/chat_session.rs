//! A single user's interactive session across all personas.

use std::sync::Arc;

use agentcoach_core::CoachError;
use agentcoach_core::assembler::{ContextAssembler, opening_notice};
use agentcoach_core::document::{DocumentExtractor, UploadedDocument};
use agentcoach_core::error::Result;
use agentcoach_core::model::{ChatMessage, ModelInvoker};
use agentcoach_core::persona::{Persona, PersonaBehavior, PersonaRegistry};
use agentcoach_core::session::{SessionState, Turn};

const DOCUMENT_WELCOME: &str = "Hi, I'm Bob, your Home Inspection Reviewer. \
Please upload your inspection report PDF. Once uploaded, I'll begin analysis immediately.";

/// Result of one conversational turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The model answered; the reply was appended to the conversation.
    Responded { reply: String },
    /// The model call failed; only the user turn was kept.
    Failed { error: CoachError },
    /// Nothing was sent.
    Skipped,
}

impl TurnOutcome {
    pub fn reply(&self) -> Option<&str> {
        match self {
            TurnOutcome::Responded { reply } => Some(reply),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TurnOutcome::Failed { .. })
    }
}

/// Result of a document upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// Extraction warning for near-empty text.
    pub warning: Option<String>,
    /// The automatic opening turn, when the upload triggered one.
    pub turn: Option<TurnOutcome>,
}

/// Routes user input for the selected persona through assembly and the
/// model, keeping every persona's conversation in its own [`SessionState`].
pub struct ChatSession {
    registry: Arc<PersonaRegistry>,
    assembler: ContextAssembler,
    invoker: Arc<dyn ModelInvoker>,
    extractor: Arc<dyn DocumentExtractor>,
    state: SessionState,
    selected: String,
}

impl ChatSession {
    /// Creates a session with the fallback persona selected.
    pub fn new(
        registry: Arc<PersonaRegistry>,
        assembler: ContextAssembler,
        invoker: Arc<dyn ModelInvoker>,
        extractor: Arc<dyn DocumentExtractor>,
    ) -> Self {
        let selected = registry.fallback().id.clone();
        Self {
            registry,
            assembler,
            invoker,
            extractor,
            state: SessionState::new(),
            selected,
        }
    }

    pub fn id(&self) -> &str {
        self.state.id()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    /// Selects a persona by name. Unknown names select the fallback.
    pub fn select_persona(&mut self, identifier: &str) -> &Persona {
        let persona = self.registry.resolve(identifier);
        self.selected = persona.id.clone();
        tracing::info!(session = %self.state.id(), persona = %self.selected, "Persona selected");
        persona
    }

    pub fn selected_persona(&self) -> &Persona {
        self.registry.resolve(&self.selected)
    }

    /// Turns of the selected persona's conversation.
    pub fn history(&self) -> &[Turn] {
        self.state
            .conversation(&self.selected)
            .map(|conversation| conversation.turns())
            .unwrap_or(&[])
    }

    /// Clears the selected persona's conversation and any upload.
    pub fn reset(&mut self) {
        self.state.reset(&self.selected);
        tracing::info!(session = %self.state.id(), persona = %self.selected, "Conversation reset");
    }

    /// Greeting shown by a document persona before anything was uploaded.
    pub fn welcome_hint(&self) -> Option<&'static str> {
        if self.selected_persona().behavior != PersonaBehavior::DocumentTriggered {
            return None;
        }
        match self.state.conversation(&self.selected) {
            Some(conversation) if !conversation.is_empty() => None,
            Some(conversation) if conversation.pending_document().is_some() => None,
            _ => Some(DOCUMENT_WELCOME),
        }
    }

    /// Submits a user turn to the selected persona.
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        if input.trim().is_empty() {
            return TurnOutcome::Skipped;
        }

        let persona = self.registry.resolve(&self.selected).clone();
        let conversation = self.state.conversation_mut(&persona.id);
        conversation.push_user(input);
        let messages = self.assembler.assemble(&persona, input, conversation).await;

        self.complete_turn(&persona, &messages).await
    }

    /// Extracts an uploaded document and attaches it to the selected persona.
    ///
    /// A document persona with an empty conversation opens the analysis on
    /// its own. Once the conversation has started, uploads are ignored
    /// until a reset.
    pub async fn upload_document(&mut self, name: &str, bytes: &[u8]) -> Result<UploadOutcome> {
        let persona = self.registry.resolve(&self.selected).clone();
        if !persona.flags().needs_document_upload {
            return Err(CoachError::unsupported(format!(
                "{} does not accept document uploads",
                persona.id
            )));
        }

        let extracted = self.extractor.extract(bytes)?;
        let warning = extracted.warning();
        if let Some(warning) = &warning {
            tracing::warn!(document = %name, "{warning}");
        }

        let conversation = self.state.conversation_mut(&persona.id);
        if !conversation.is_empty() {
            tracing::info!(
                persona = %persona.id,
                document = %name,
                "Conversation already started; upload not analysed"
            );
            return Ok(UploadOutcome {
                warning,
                turn: None,
            });
        }

        conversation.attach_document(UploadedDocument::new(name, extracted));
        if !ContextAssembler::should_auto_trigger(&persona, conversation) {
            return Ok(UploadOutcome {
                warning,
                turn: None,
            });
        }

        let Some(document) = conversation.take_pending_for_opening().cloned() else {
            return Ok(UploadOutcome {
                warning,
                turn: None,
            });
        };
        tracing::info!(persona = %persona.id, document = %document.name, "Starting automatic analysis");
        conversation.push_user(opening_notice(&document));
        let messages = ContextAssembler::opening_request(&persona, &document);

        let turn = self.complete_turn(&persona, &messages).await;
        Ok(UploadOutcome {
            warning,
            turn: Some(turn),
        })
    }

    async fn complete_turn(&mut self, persona: &Persona, messages: &[ChatMessage]) -> TurnOutcome {
        let result = self.invoker.invoke(messages, persona.temperature).await;
        let conversation = self.state.conversation_mut(&persona.id);
        match result {
            Ok(reply) => {
                conversation.push_assistant(reply.clone());
                tracing::info!(persona = %persona.id, turns = conversation.len(), "Turn completed");
                TurnOutcome::Responded { reply }
            }
            Err(error) => {
                conversation.mark_failed();
                tracing::warn!(persona = %persona.id, error = %error, "Model invocation failed");
                TurnOutcome::Failed { error }
            }
        }
    }
}
