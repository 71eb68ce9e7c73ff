//! Persona registry.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::model::Persona;
use super::preset::{default_sections, generic_assistant, get_default_presets};
use crate::error::{CoachError, Result};

/// A named group of personas shown together when browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaSection {
    pub title: String,
    pub persona_ids: Vec<String>,
}

impl PersonaSection {
    pub fn new(title: impl Into<String>, persona_ids: &[&str]) -> Self {
        Self {
            title: title.into(),
            persona_ids: persona_ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

fn lookup_key(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

/// Immutable mapping from persona identifier to persona.
///
/// Lookups are case-insensitive. A miss resolves to the fallback persona,
/// so [`PersonaRegistry::resolve`] never fails.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: HashMap<String, Persona>,
    /// Registration order, for listing
    order: Vec<String>,
    sections: Vec<PersonaSection>,
    fallback: Persona,
}

impl PersonaRegistry {
    /// Builds a registry, validating every persona and section.
    pub fn new(
        personas: Vec<Persona>,
        sections: Vec<PersonaSection>,
        fallback: Persona,
    ) -> Result<Self> {
        fallback.validate()?;

        let mut map = HashMap::with_capacity(personas.len());
        let mut order = Vec::with_capacity(personas.len());
        for persona in personas {
            persona.validate()?;
            let key = lookup_key(&persona.id);
            if map.contains_key(&key) {
                return Err(CoachError::template(format!(
                    "duplicate persona identifier '{}'",
                    persona.id
                )));
            }
            order.push(key.clone());
            map.insert(key, persona);
        }

        let mut seen_titles = HashSet::new();
        for section in &sections {
            if !seen_titles.insert(section.title.as_str()) {
                return Err(CoachError::template(format!(
                    "duplicate section '{}'",
                    section.title
                )));
            }
            if let Some(missing) = section
                .persona_ids
                .iter()
                .find(|id| !map.contains_key(&lookup_key(id)))
            {
                return Err(CoachError::UnknownPersona(format!(
                    "{missing} (listed in section '{}')",
                    section.title
                )));
            }
        }

        Ok(Self {
            personas: map,
            order,
            sections,
            fallback,
        })
    }

    /// Builds the registry of built-in personas with `today` embedded in
    /// date-aware prompts.
    pub fn with_presets(today: NaiveDate) -> Result<Self> {
        Self::new(
            get_default_presets(today),
            default_sections(),
            generic_assistant(),
        )
    }

    /// Resolves `identifier`, falling back to the generic assistant.
    pub fn resolve(&self, identifier: &str) -> &Persona {
        match self.get(identifier) {
            Some(persona) => persona,
            None => {
                tracing::debug!(identifier, fallback = %self.fallback.id, "unknown persona, using fallback");
                &self.fallback
            }
        }
    }

    /// Strict lookup without the fallback.
    pub fn get(&self, identifier: &str) -> Option<&Persona> {
        self.personas.get(&lookup_key(identifier))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.personas.contains_key(&lookup_key(identifier))
    }

    /// Registered personas in registration order (fallback excluded).
    pub fn personas(&self) -> impl Iterator<Item = &Persona> + '_ {
        self.order.iter().filter_map(|key| self.personas.get(key))
    }

    pub fn sections(&self) -> &[PersonaSection] {
        &self.sections
    }

    /// Finds a section by case-insensitive title prefix.
    pub fn section(&self, title: &str) -> Option<&PersonaSection> {
        let wanted = title.trim().to_lowercase();
        self.sections
            .iter()
            .find(|section| section.title.to_lowercase().starts_with(&wanted))
    }

    pub fn fallback(&self) -> &Persona {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::model::{PersonaBehavior, PromptTemplate};
    use crate::persona::preset::DEFAULT_PERSONA_ID;

    fn registry() -> PersonaRegistry {
        PersonaRegistry::with_presets(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
            .expect("presets should be valid")
    }

    #[test]
    fn test_every_preset_respects_invariants() {
        let registry = registry();
        assert_eq!(registry.len(), 13);
        for persona in registry.personas().chain(std::iter::once(registry.fallback())) {
            assert!(
                (0.0..=1.0).contains(&persona.temperature),
                "{} temperature out of range",
                persona.id
            );
            assert!(persona.template.slot_count() <= 1);
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = registry();
        assert_eq!(registry.resolve("  contract max ").id, "Contract Max");
        assert_eq!(registry.resolve("BOB").behavior, PersonaBehavior::DocumentTriggered);
    }

    #[test]
    fn test_resolve_unknown_uses_fallback() {
        let registry = registry();
        let persona = registry.resolve("Nobody");
        assert_eq!(persona.id, DEFAULT_PERSONA_ID);
        assert!(registry.get("Nobody").is_none());
    }

    #[test]
    fn test_simon_prompt_embeds_date() {
        let registry = registry();
        let prompt = registry.resolve("Simon").template.render_unfilled();
        assert!(prompt.contains("CURRENT DATE: October 18, 2026"));
    }

    #[test]
    fn test_sections_match_catalog() {
        let registry = registry();
        assert_eq!(registry.sections().len(), 5);
        let leads = registry.section("lead generation").unwrap();
        assert_eq!(leads.persona_ids, vec!["Troy", "Karina"]);
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let persona = || {
            Persona::new("Ava", "x", PromptTemplate::fixed("x"), PersonaBehavior::Plain)
        };
        let result = PersonaRegistry::new(vec![persona(), persona()], Vec::new(), generic_assistant());
        assert!(result.is_err());
    }

    #[test]
    fn test_section_with_unknown_persona_is_rejected() {
        let result = PersonaRegistry::new(
            Vec::new(),
            vec![PersonaSection::new("Empty", &["Ghost"])],
            generic_assistant(),
        );
        assert!(matches!(result, Err(CoachError::UnknownPersona(_))));
    }
}
