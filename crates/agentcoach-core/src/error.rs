//! Error types for Agent Coach.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Agent Coach workspace.
///
/// Every variant is scoped to a single turn or a single start-up step.
/// Nothing here is meant to abort an interactive session.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoachError {
    /// Persona lookup missed. The registry falls back to the generic
    /// assistant, so this only shows up in strict lookups.
    #[error("Unknown persona: '{0}'")]
    UnknownPersona(String),

    /// The uploaded payload could not be opened as a document
    #[error("Document error: {0}")]
    Document(String),

    /// The hosted model call failed (transport, quota, content filter)
    #[error("Model invocation failed: {message}")]
    Invocation {
        status_code: Option<u16>,
        message: String,
    },

    /// A prompt template or persona definition is inconsistent
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The selected persona cannot perform the requested action
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl CoachError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn document(message: impl Into<String>) -> Self {
        Self::Document(message.into())
    }

    /// Creates an Invocation error without an HTTP status
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::Invocation {
            status_code: None,
            message: message.into(),
        }
    }

    /// Creates an Invocation error carrying the HTTP status of the failed call
    pub fn invocation_with_status(status_code: u16, message: impl Into<String>) -> Self {
        Self::Invocation {
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_document(&self) -> bool {
        matches!(self, Self::Document(_))
    }

    pub fn is_invocation(&self) -> bool {
        matches!(self, Self::Invocation { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CoachError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, CoachError>`.
pub type Result<T> = std::result::Result<T, CoachError>;
