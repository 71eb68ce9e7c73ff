//! Application layer for Agent Coach.
//!
//! This crate provides the use cases the front-end drives: one chat session
//! per user, and a hub that hands out sessions by id.

pub mod chat_session;
pub mod session_hub;

pub use chat_session::{ChatSession, TurnOutcome, UploadOutcome};
pub use session_hub::SessionHub;
