//! Persona domain module.
//!
//! # Module Structure
//!
//! - `model`: persona, prompt template, behavior tag
//! - `registry`: identifier lookup with fallback, section catalog
//! - `preset`: built-in personas and sections
//! - `prompts`: system prompt text

mod model;
mod preset;
mod prompts;
mod registry;

pub use model::{
    INPUT_SLOT, Persona, PersonaBehavior, PersonaFlags, PromptTemplate, ResponseStyle,
};
pub use preset::{DEFAULT_PERSONA_ID, default_sections, generic_assistant, get_default_presets};
pub use registry::{PersonaRegistry, PersonaSection};
