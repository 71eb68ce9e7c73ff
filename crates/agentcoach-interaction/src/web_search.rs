//! Web search backed by Gemini's `google_search` tool.
//!
//! The grounded answer and its reference links are flattened into a text
//! block. Any failure is reported as the unavailable sentinel so the
//! calling persona still gets a prompt.

use std::collections::HashSet;

use agentcoach_core::error::Result;
use agentcoach_core::search::{SearchIntent, SearchProvider, unavailable_notice};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::http::{API_KEY_HEADER, BASE_URL, map_decode_error, map_http_error, map_transport_error};

const MAX_REFERENCES: usize = 8;

/// Search provider calling Gemini with the google_search tool enabled.
#[derive(Clone)]
pub struct GeminiWebSearch {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiWebSearch {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn perform_search(&self, query: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: query.to_string(),
                }],
            }],
            tools: vec![Tool::default()],
        };

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| map_transport_error("Google Search", err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Google Search error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| map_decode_error("Google Search", err))?;

        Ok(format_results(&payload))
    }
}

#[async_trait]
impl SearchProvider for GeminiWebSearch {
    async fn search(&self, query: &str, intent: &SearchIntent) -> String {
        let augmented = intent.augment(query);
        if augmented.is_empty() {
            return unavailable_notice("empty query");
        }

        match self.perform_search(&augmented).await {
            Ok(text) => {
                tracing::debug!(intent = %intent.label(), chars = text.len(), "Web search complete");
                text
            }
            Err(err) => {
                tracing::warn!(intent = %intent.label(), error = %err, "Web search failed");
                unavailable_notice(&err.to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize, Default)]
struct Tool {
    google_search: GoogleSearchConfig,
}

#[derive(Serialize, Default)]
struct GoogleSearchConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference {
    title: String,
    url: String,
}

fn format_results(payload: &Value) -> String {
    let answer = extract_answer(payload).unwrap_or_else(|| "No results found.".to_string());
    let references = extract_references(payload);
    if references.is_empty() {
        return answer;
    }

    let sources = references
        .iter()
        .take(MAX_REFERENCES)
        .map(|reference| format!("- {} ({})", reference.title, reference.url))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{answer}\n\nSources:\n{sources}")
}

fn extract_answer(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let collected: Vec<String> = candidates
        .iter()
        .filter_map(|candidate| {
            candidate
                .get("content")
                .and_then(|content| content.get("parts"))
                .and_then(|parts| parts.as_array())
        })
        .flatten()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n\n"))
    }
}

fn extract_references(root: &Value) -> Vec<Reference> {
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    let Some(candidates) = root.get("candidates").and_then(|c| c.as_array()) else {
        return references;
    };

    for candidate in candidates {
        let Some(chunks) = candidate
            .get("groundingMetadata")
            .and_then(|metadata| metadata.get("groundingChunks"))
            .and_then(|chunks| chunks.as_array())
        else {
            continue;
        };

        for chunk in chunks {
            let Some(web) = chunk.get("web") else {
                continue;
            };
            let Some(url) = web
                .get("uri")
                .or_else(|| web.get("url"))
                .and_then(|v| v.as_str())
            else {
                continue;
            };
            if !seen.insert(url.to_string()) {
                continue;
            }

            let title = web
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or(url)
                .to_string();
            references.push(Reference {
                title,
                url: url.to_string(),
            });
        }
    }

    references
}
