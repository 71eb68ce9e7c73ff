//! Context assembly.
//!
//! Decides, per persona behavior, what goes into the outgoing message list:
//! conversation history, search results, knowledge text or an uploaded
//! document. Every list starts with exactly one system entry.

use std::sync::Arc;

use crate::document::UploadedDocument;
use crate::knowledge::KnowledgeLoader;
use crate::model::ChatMessage;
use crate::persona::{Persona, PersonaBehavior};
use crate::search::{SearchIntent, SearchProvider};
use crate::session::{Conversation, TurnRole};

/// Instruction sent with the document on the opening turn.
pub const OPENING_TRIGGER: &str = "Here is the Home Inspection Report PDF content. Please start the analysis immediately as per your instructions.";
pub const PDF_CONTENT_START: &str = "--- PDF CONTENT START ---";
pub const PDF_CONTENT_END: &str = "--- PDF CONTENT END ---";
pub const SEARCH_RESULTS_MARKER: &str = "--- WEB SEARCH RESULTS ---";
pub const KNOWLEDGE_START: &str = "--- REFERENCE KNOWLEDGE START ---";
pub const KNOWLEDGE_END: &str = "--- REFERENCE KNOWLEDGE END ---";

/// Characters of the document kept in the stored opening notice.
const NOTICE_PREVIEW_CHARS: usize = 50;

const GREETINGS: [&str; 2] = ["hi", "hello"];

/// Returns true when `input` is a bare greeting, ignoring case, surrounding
/// whitespace and trailing punctuation.
pub fn is_greeting(input: &str) -> bool {
    let normalized = input
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_lowercase();
    GREETINGS.contains(&normalized.as_str())
}

/// Wraps extracted document text between the content markers.
pub fn wrap_document(document: &UploadedDocument) -> String {
    format!(
        "{PDF_CONTENT_START}\n{}\n{PDF_CONTENT_END}",
        document.text()
    )
}

/// User message carrying the document on the opening turn.
pub fn opening_payload(document: &UploadedDocument) -> String {
    format!("{OPENING_TRIGGER}\n\n{}", wrap_document(document))
}

/// Abbreviated turn stored in the conversation in place of the full document.
pub fn opening_notice(document: &UploadedDocument) -> String {
    let preview: String = document.text().chars().take(NOTICE_PREVIEW_CHARS).collect();
    format!(
        "User uploaded PDF '{}'. Content: {}... [Rest of content hidden]",
        document.name, preview
    )
}

/// Builds outgoing message lists for every persona behavior.
#[derive(Clone)]
pub struct ContextAssembler {
    search: Arc<dyn SearchProvider>,
    knowledge: Arc<dyn KnowledgeLoader>,
}

impl ContextAssembler {
    pub fn new(search: Arc<dyn SearchProvider>, knowledge: Arc<dyn KnowledgeLoader>) -> Self {
        Self { search, knowledge }
    }

    /// Whether a document-triggered persona should open the conversation on
    /// its own: a document is pending and nothing has been said yet.
    pub fn should_auto_trigger(persona: &Persona, conversation: &Conversation) -> bool {
        persona.behavior == PersonaBehavior::DocumentTriggered
            && conversation.is_empty()
            && conversation.pending_document().is_some()
    }

    /// Message list for the automatic opening turn.
    pub fn opening_request(persona: &Persona, document: &UploadedDocument) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(persona.template.render_unfilled()),
            ChatMessage::user(opening_payload(document)),
        ]
    }

    /// Builds the message list for a user turn.
    ///
    /// `conversation` must already contain the user turn for `input`.
    pub async fn assemble(
        &self,
        persona: &Persona,
        input: &str,
        conversation: &Conversation,
    ) -> Vec<ChatMessage> {
        let messages = match &persona.behavior {
            PersonaBehavior::Plain => {
                let mut messages = vec![ChatMessage::system(persona.template.render_unfilled())];
                messages.extend(history(conversation));
                messages
            }
            PersonaBehavior::TemplateSub => {
                vec![ChatMessage::system(persona.template.render(input))]
            }
            PersonaBehavior::SearchAugmented { intents } => {
                if is_greeting(input) {
                    tracing::debug!(persona = %persona.id, "greeting detected, skipping web search");
                    vec![
                        ChatMessage::system(persona.template.render_unfilled()),
                        ChatMessage::user(input.trim()),
                    ]
                } else {
                    let results = self.search_all(input, intents).await;
                    let slot = format!("{}\n\n{SEARCH_RESULTS_MARKER}\n{results}", input.trim());
                    vec![ChatMessage::system(persona.template.render(&slot))]
                }
            }
            PersonaBehavior::DocumentTriggered => {
                let mut messages = vec![ChatMessage::system(persona.template.render_unfilled())];
                messages.extend(document_history(conversation));
                messages
            }
            PersonaBehavior::KnowledgeAugmented {
                base,
                include_history,
            } => {
                let knowledge = self.knowledge.load(*base).await;
                let mut system = persona.template.render_unfilled();
                if knowledge.trim().is_empty() {
                    tracing::debug!(persona = %persona.id, base = %base, "knowledge directory empty or missing");
                } else {
                    system.push_str(&format!("\n\n{KNOWLEDGE_START}\n{knowledge}\n{KNOWLEDGE_END}"));
                }

                let mut messages = vec![ChatMessage::system(system)];
                if *include_history {
                    messages.extend(history(conversation));
                } else {
                    messages.push(ChatMessage::user(input.trim()));
                }
                messages
            }
        };

        tracing::debug!(
            persona = %persona.id,
            history_turns = conversation.len(),
            messages = messages.len(),
            "assembled model request"
        );
        messages
    }

    /// Runs one search per intent and concatenates the results in intent order.
    async fn search_all(&self, input: &str, intents: &[SearchIntent]) -> String {
        let mut blocks = Vec::with_capacity(intents.len());
        for intent in intents {
            let text = self.search.search(input, intent).await;
            blocks.push(format!("[{}]\n{}", intent.label(), text.trim()));
        }
        blocks.join("\n\n")
    }
}

fn to_message(role: TurnRole, content: &str) -> ChatMessage {
    match role {
        TurnRole::User => ChatMessage::user(content),
        TurnRole::Assistant => ChatMessage::assistant(content),
    }
}

fn history(conversation: &Conversation) -> Vec<ChatMessage> {
    conversation
        .turns()
        .iter()
        .map(|turn| to_message(turn.role, &turn.content))
        .collect()
}

/// History with the stored opening notice expanded back to the full document.
fn document_history(conversation: &Conversation) -> Vec<ChatMessage> {
    let mut messages = history(conversation);
    if let (Some(document), Some(first)) = (conversation.opening_document(), messages.first_mut()) {
        if first.content == opening_notice(document) {
            first.content = opening_payload(document);
        }
    }
    messages
}
