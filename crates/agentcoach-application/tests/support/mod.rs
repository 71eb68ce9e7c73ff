#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use agentcoach_application::ChatSession;
use agentcoach_core::CoachError;
use agentcoach_core::assembler::ContextAssembler;
use agentcoach_core::document::{DocumentExtractor, ExtractedDocument};
use agentcoach_core::error::Result;
use agentcoach_core::knowledge::{KnowledgeBase, KnowledgeLoader};
use agentcoach_core::model::{ChatMessage, ModelInvoker};
use agentcoach_core::persona::PersonaRegistry;
use agentcoach_core::search::{SearchIntent, SearchProvider};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Records every request and answers with a canned reply or error.
#[derive(Default)]
pub struct MockInvoker {
    pub calls: Mutex<Vec<(Vec<ChatMessage>, f32)>>,
    pub fail: Mutex<bool>,
}

impl MockInvoker {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: Mutex::new(true),
        }
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> (Vec<ChatMessage>, f32) {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ModelInvoker for MockInvoker {
    async fn invoke(&self, messages: &[ChatMessage], temperature: f32) -> Result<String> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((messages.to_vec(), temperature));
            calls.len()
        };
        if *self.fail.lock().unwrap() {
            Err(CoachError::invocation_with_status(503, "model unavailable"))
        } else {
            Ok(format!("reply #{count}"))
        }
    }
}

#[derive(Default)]
pub struct RecordingSearch {
    pub queries: Mutex<Vec<(String, SearchIntent)>>,
}

impl RecordingSearch {
    pub fn count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchProvider for RecordingSearch {
    async fn search(&self, query: &str, intent: &SearchIntent) -> String {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), intent.clone()));
        format!("results for {}", intent.augment(query))
    }
}

pub struct FixedKnowledge(pub &'static str);

#[async_trait]
impl KnowledgeLoader for FixedKnowledge {
    async fn load(&self, _base: KnowledgeBase) -> String {
        self.0.to_string()
    }
}

/// Returns the given pages for any payload except `b"corrupt"`.
pub struct StubExtractor {
    pub pages: Vec<Option<String>>,
}

impl StubExtractor {
    pub fn report() -> Self {
        Self {
            pages: (1..=5)
                .map(|page| {
                    Some(format!(
                        "Page {page}: inspector notes a defect that needs a licensed contractor."
                    ))
                })
                .collect(),
        }
    }

    pub fn blank() -> Self {
        Self {
            pages: vec![None, None],
        }
    }
}

impl DocumentExtractor for StubExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument> {
        if bytes == b"corrupt" {
            return Err(CoachError::document("Failed to parse PDF: invalid header"));
        }
        Ok(ExtractedDocument::from_pages(self.pages.clone()))
    }
}

pub struct Harness {
    pub session: ChatSession,
    pub invoker: Arc<MockInvoker>,
    pub search: Arc<RecordingSearch>,
}

pub fn harness_with(invoker: MockInvoker, extractor: StubExtractor) -> Harness {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let registry = Arc::new(PersonaRegistry::with_presets(today).unwrap());
    let invoker = Arc::new(invoker);
    let search = Arc::new(RecordingSearch::default());
    let assembler = ContextAssembler::new(search.clone(), Arc::new(FixedKnowledge("")));
    let session = ChatSession::new(registry, assembler, invoker.clone(), Arc::new(extractor));
    Harness {
        session,
        invoker,
        search,
    }
}

pub fn harness() -> Harness {
    harness_with(MockInvoker::default(), StubExtractor::report())
}
