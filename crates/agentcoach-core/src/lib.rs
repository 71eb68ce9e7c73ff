//! Domain layer of Agent Coach: personas, per-persona conversations, the
//! capability traits for documents, search, knowledge and model calls, and
//! the context assembler that ties them together.

pub mod assembler;
pub mod config;
pub mod document;
pub mod error;
pub mod knowledge;
pub mod model;
pub mod persona;
pub mod search;
pub mod session;

// Re-export common error type
pub use error::CoachError;
