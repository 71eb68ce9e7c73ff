//! Default persona presets.
//!
//! Provides the built-in Agent Coach AI personas and the section catalog
//! used to browse them.

use chrono::NaiveDate;

use super::model::{Persona, PersonaBehavior, PromptTemplate, ResponseStyle};
use super::prompts;
use super::registry::PersonaSection;
use crate::knowledge::KnowledgeBase;
use crate::search::SearchIntent;

/// Identifier of the fallback persona.
pub const DEFAULT_PERSONA_ID: &str = "Assistant";

/// Returns the built-in personas.
///
/// `today` is embedded in prompts that reference the current date.
pub fn get_default_presets(today: NaiveDate) -> Vec<Persona> {
    let current_date = today.format("%B %d, %Y").to_string();

    vec![
        Persona::new(
            "Simon",
            "AI-Assisted Home Valuation Expert",
            PromptTemplate::fixed(prompts::SIMON.replace("{current_date}", &current_date)),
            PersonaBehavior::Plain,
        )
        .with_temperature(0.2),
        Persona::new(
            "Bob",
            "Home Inspection Reviewer",
            PromptTemplate::fixed(prompts::BOB),
            PersonaBehavior::DocumentTriggered,
        ),
        Persona::new(
            "Contract Max",
            "Listing Agreement Specialist",
            PromptTemplate::fixed(prompts::CONTRACT_MAX),
            PersonaBehavior::KnowledgeAugmented {
                base: KnowledgeBase::Contracts,
                include_history: true,
            },
        ),
        Persona::new(
            "Ava",
            "Listing Description Writer",
            PromptTemplate::with_slot(prompts::AVA_HEAD, prompts::AVA_TAIL),
            PersonaBehavior::TemplateSub,
        )
        .with_style(ResponseStyle::Creative),
        Persona::new(
            "Leo",
            "Neighborhood Insights Reporter",
            PromptTemplate::with_slot(prompts::LEO_HEAD, prompts::LEO_TAIL),
            PersonaBehavior::SearchAugmented {
                intents: vec![SearchIntent::News],
            },
        )
        .with_temperature(0.3),
        Persona::new(
            "Marco",
            "Buyer Consultation Coach",
            PromptTemplate::fixed(prompts::MARCO),
            PersonaBehavior::Plain,
        )
        .with_temperature(0.4),
        Persona::new(
            "Carmen",
            "Buyer Follow-Up Specialist",
            PromptTemplate::with_slot(prompts::CARMEN_HEAD, prompts::CARMEN_TAIL),
            PersonaBehavior::TemplateSub,
        )
        .with_style(ResponseStyle::Creative)
        .with_temperature(0.6),
        Persona::new(
            "Lexy",
            "Financing Explainer",
            PromptTemplate::fixed(prompts::LEXY),
            PersonaBehavior::Plain,
        )
        .with_temperature(0.3),
        Persona::new(
            "Karina",
            "Social Media Content Strategist",
            PromptTemplate::with_slot(prompts::KARINA_HEAD, prompts::KARINA_TAIL),
            PersonaBehavior::SearchAugmented {
                intents: vec![
                    SearchIntent::social("instagram.com"),
                    SearchIntent::social("tiktok.com"),
                ],
            },
        )
        .with_style(ResponseStyle::Creative),
        Persona::new(
            "Troy",
            "Prospecting Script Coach",
            PromptTemplate::with_slot(prompts::TROY_HEAD, prompts::TROY_TAIL),
            PersonaBehavior::TemplateSub,
        )
        .with_style(ResponseStyle::Creative)
        .with_temperature(0.6),
        Persona::new(
            "Max",
            "Contract Compliance Reviewer",
            PromptTemplate::fixed(prompts::MAX),
            PersonaBehavior::KnowledgeAugmented {
                base: KnowledgeBase::Contracts,
                include_history: false,
            },
        ),
        Persona::new(
            "Amanda",
            "Transaction Coordinator",
            PromptTemplate::fixed(prompts::AMANDA),
            PersonaBehavior::Plain,
        )
        .with_temperature(0.2),
        Persona::new(
            "Agent Coach AI",
            "Business Coach",
            PromptTemplate::fixed(prompts::AGENT_COACH),
            PersonaBehavior::KnowledgeAugmented {
                base: KnowledgeBase::Coaching,
                include_history: true,
            },
        )
        .with_temperature(0.5),
    ]
}

/// Persona used when a lookup misses.
pub fn generic_assistant() -> Persona {
    Persona::new(
        DEFAULT_PERSONA_ID,
        "General Assistant",
        PromptTemplate::fixed(prompts::GENERIC_ASSISTANT),
        PersonaBehavior::Plain,
    )
    .with_temperature(0.3)
}

/// Returns the section catalog. A persona may appear in several sections.
pub fn default_sections() -> Vec<PersonaSection> {
    vec![
        PersonaSection::new(
            "LISTINGS (Sellers & Listing Agents)",
            &["Simon", "Bob", "Contract Max", "Ava", "Leo"],
        ),
        PersonaSection::new("BUYERS & CONVERSION", &["Marco", "Carmen", "Lexy", "Karina"]),
        PersonaSection::new("LEAD GENERATION & PROSPECTING", &["Troy", "Karina"]),
        PersonaSection::new(
            "CONTRACTS, COMPLIANCE & TRANSACTIONS",
            &["Max", "Bob", "Amanda"],
        ),
        PersonaSection::new("COACHING, PRODUCTIVITY & GROWTH", &["Agent Coach AI"]),
    ]
}
