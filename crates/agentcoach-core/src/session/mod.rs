//! Session domain module.
//!
//! # Module Structure
//!
//! - `message`: turn types (`TurnRole`, `Turn`)
//! - `conversation`: per-persona history and its state machine
//! - `state`: session-scoped store of conversations (`SessionState`)

mod conversation;
mod message;
mod state;

pub use conversation::{Conversation, ConversationState};
pub use message::{Turn, TurnRole};
pub use state::SessionState;
