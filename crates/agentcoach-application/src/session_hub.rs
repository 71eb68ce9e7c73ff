//! Keyed collection of live chat sessions.
//!
//! Sessions live only in memory; dropping the hub drops every
//! conversation. Each session sits behind its own mutex so turns within a
//! session are serialized while different sessions proceed concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::chat_session::ChatSession;

type SessionFactory = dyn Fn() -> ChatSession + Send + Sync;

/// Hands out [`ChatSession`]s by session id.
pub struct SessionHub {
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<ChatSession>>>>>,
    factory: Arc<SessionFactory>,
}

impl SessionHub {
    /// Creates a hub that builds new sessions with `factory`.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> ChatSession + Send + Sync + 'static,
    {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            factory: Arc::new(factory),
        }
    }

    /// Returns the session for `session_id`, creating it on first use.
    pub async fn get_or_create(&self, session_id: &str) -> Arc<Mutex<ChatSession>> {
        if let Some(session) = self.sessions.read().await.get(session_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::info!(session = %session_id, "Creating chat session");
                Arc::new(Mutex::new((self.factory)()))
            })
            .clone()
    }

    pub async fn get(&self, session_id: &str) -> Option<Arc<Mutex<ChatSession>>> {
        self.sessions.read().await.get(session_id).cloned()
    }

    /// Drops a session and all of its conversations.
    pub async fn remove(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(session_id).is_some();
        if removed {
            tracing::info!(session = %session_id, "Chat session removed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
