//! Persona domain model.
//!
//! A persona is a named behavioral configuration: a system prompt template,
//! a response temperature and a behavior tag that tells the context
//! assembler which external inputs to gather before each model call.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{CoachError, Result};
use crate::knowledge::KnowledgeBase;
use crate::search::SearchIntent;

/// Placeholder token accepted by [`PromptTemplate::parse`].
pub const INPUT_SLOT: &str = "{user_input}";

/// A system prompt with at most one injection slot.
///
/// The template is stored already split around the slot, so rendering is
/// plain concatenation and a missing slot is detected when the template is
/// built rather than silently ignored at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    prefix: String,
    /// Text following the slot; `None` when the template has no slot
    suffix: Option<String>,
}

impl PromptTemplate {
    /// A template without an injection slot.
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            prefix: text.into(),
            suffix: None,
        }
    }

    /// A template whose slot sits between `prefix` and `suffix`.
    pub fn with_slot(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: Some(suffix.into()),
        }
    }

    /// Parses a template written with an inline [`INPUT_SLOT`] token.
    ///
    /// Fails when the token appears more than once.
    pub fn parse(text: &str) -> Result<Self> {
        let mut parts = text.splitn(3, INPUT_SLOT);
        let prefix = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Ok(Self::fixed(prefix)),
            (Some(suffix), None) => Ok(Self::with_slot(prefix, suffix)),
            (Some(_), Some(_)) => Err(CoachError::template(format!(
                "template contains more than one {INPUT_SLOT} placeholder"
            ))),
        }
    }

    pub fn has_slot(&self) -> bool {
        self.suffix.is_some()
    }

    pub fn slot_count(&self) -> usize {
        usize::from(self.has_slot())
    }

    /// Renders the template with `value` in the slot.
    ///
    /// Templates without a slot render their static text and ignore `value`.
    pub fn render(&self, value: &str) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{}{}", self.prefix, value, suffix),
            None => self.prefix.clone(),
        }
    }

    /// Renders the template with an empty slot.
    pub fn render_unfilled(&self) -> String {
        self.render("")
    }
}

/// Default randomness preference of a persona.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseStyle {
    /// Deterministic phrasing: reports, contracts, extraction
    #[default]
    Precise,
    /// Varied phrasing: marketing copy, scripts, social posts
    Creative,
}

impl ResponseStyle {
    pub fn default_temperature(self) -> f32 {
        match self {
            ResponseStyle::Precise => 0.1,
            ResponseStyle::Creative => 0.7,
        }
    }
}

/// Which context a persona gathers before each model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonaBehavior {
    /// Full conversation history is replayed
    Plain,
    /// The raw input fills the template slot; no history
    TemplateSub,
    /// Search results for each intent fill the template slot; no history
    SearchAugmented { intents: Vec<SearchIntent> },
    /// An uploaded document opens the conversation automatically
    DocumentTriggered,
    /// A knowledge directory is appended to the instructions every turn
    KnowledgeAugmented {
        base: KnowledgeBase,
        include_history: bool,
    },
}

/// Capabilities derived from a persona's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersonaFlags {
    pub needs_document_upload: bool,
    pub needs_web_search: bool,
    pub needs_knowledge_base: bool,
}

/// A selectable assistant persona. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    /// Identifier, also used as the display name (e.g. "Bob")
    pub id: String,
    /// One-line role description
    pub role: String,
    pub template: PromptTemplate,
    /// Sampling temperature in `[0, 1]`
    pub temperature: f32,
    pub style: ResponseStyle,
    pub behavior: PersonaBehavior,
}

impl Persona {
    /// Creates a precise persona with the style's default temperature.
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        template: PromptTemplate,
        behavior: PersonaBehavior,
    ) -> Self {
        let style = ResponseStyle::default();
        Self {
            id: id.into(),
            role: role.into(),
            template,
            temperature: style.default_temperature(),
            style,
            behavior,
        }
    }

    /// Sets the response style and resets the temperature to its default.
    pub fn with_style(mut self, style: ResponseStyle) -> Self {
        self.style = style;
        self.temperature = style.default_temperature();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn flags(&self) -> PersonaFlags {
        match &self.behavior {
            PersonaBehavior::Plain | PersonaBehavior::TemplateSub => PersonaFlags::default(),
            PersonaBehavior::SearchAugmented { .. } => PersonaFlags {
                needs_web_search: true,
                ..PersonaFlags::default()
            },
            PersonaBehavior::DocumentTriggered => PersonaFlags {
                needs_document_upload: true,
                ..PersonaFlags::default()
            },
            PersonaBehavior::KnowledgeAugmented { .. } => PersonaFlags {
                needs_knowledge_base: true,
                ..PersonaFlags::default()
            },
        }
    }

    /// Checks the invariants the assembler relies on.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CoachError::template("persona identifier is empty"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(CoachError::template(format!(
                "persona '{}' has temperature {} outside [0, 1]",
                self.id, self.temperature
            )));
        }
        match &self.behavior {
            PersonaBehavior::TemplateSub | PersonaBehavior::SearchAugmented { .. }
                if !self.template.has_slot() =>
            {
                Err(CoachError::template(format!(
                    "persona '{}' substitutes input but its template has no slot",
                    self.id
                )))
            }
            PersonaBehavior::SearchAugmented { intents } if intents.is_empty() => {
                Err(CoachError::template(format!(
                    "persona '{}' is search-augmented but declares no search intent",
                    self.id
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_with_single_slot() {
        let template = PromptTemplate::parse("Write a listing for: {user_input}. Be vivid.").unwrap();
        assert!(template.has_slot());
        assert_eq!(
            template.render("3BR house in Austin"),
            "Write a listing for: 3BR house in Austin. Be vivid."
        );
        assert_eq!(template.render_unfilled(), "Write a listing for: . Be vivid.");
    }

    #[test]
    fn test_parse_template_rejects_two_slots() {
        let err = PromptTemplate::parse("{user_input} and {user_input}").unwrap_err();
        assert!(matches!(err, CoachError::Template(_)));
    }

    #[test]
    fn test_fixed_template_ignores_value() {
        let template = PromptTemplate::parse("You are Simon.").unwrap();
        assert_eq!(template.slot_count(), 0);
        assert_eq!(template.render("ignored"), "You are Simon.");
    }

    #[test]
    fn test_validate_rejects_missing_slot() {
        let persona = Persona::new(
            "Ava",
            "Listing copywriter",
            PromptTemplate::fixed("no slot here"),
            PersonaBehavior::TemplateSub,
        );
        assert!(persona.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let persona = Persona::new(
            "Simon",
            "Valuation",
            PromptTemplate::fixed("x"),
            PersonaBehavior::Plain,
        )
        .with_temperature(1.5);
        assert!(persona.validate().is_err());
    }

    #[test]
    fn test_flags_follow_behavior() {
        let bob = Persona::new(
            "Bob",
            "Inspection reviewer",
            PromptTemplate::fixed("x"),
            PersonaBehavior::DocumentTriggered,
        );
        assert!(bob.flags().needs_document_upload);
        assert!(!bob.flags().needs_web_search);

        let max = Persona::new(
            "Max",
            "Contracts",
            PromptTemplate::fixed("x"),
            PersonaBehavior::KnowledgeAugmented {
                base: KnowledgeBase::Contracts,
                include_history: false,
            },
        );
        assert!(max.flags().needs_knowledge_base);
    }

    #[test]
    fn test_with_style_sets_default_temperature() {
        let persona = Persona::new("Ava", "x", PromptTemplate::fixed("x"), PersonaBehavior::Plain)
            .with_style(ResponseStyle::Creative);
        assert_eq!(persona.temperature, 0.7);
        assert_eq!(persona.style.to_string(), "creative");
    }

    #[test]
    fn test_new_persona_defaults_to_precise_style() {
        assert_eq!(ResponseStyle::default(), ResponseStyle::Precise);
        let persona = Persona::new("Bob", "x", PromptTemplate::fixed("x"), PersonaBehavior::Plain);
        assert_eq!(persona.style, ResponseStyle::Precise);
        assert_eq!(persona.temperature, 0.1);
    }
}
