//! Gemini REST implementation of [`ModelInvoker`].
//!
//! Every call is a single `generateContent` request. The leading system
//! entry travels as `systemInstruction`; the remaining turns become
//! `user`/`model` contents in order.

use agentcoach_core::CoachError;
use agentcoach_core::error::Result;
use agentcoach_core::model::{ChatMessage, ChatRole, ModelInvoker};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::http::{API_KEY_HEADER, BASE_URL, map_decode_error, map_http_error, map_transport_error};

/// Invoker that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiModelInvoker {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiModelInvoker {
    /// Creates an invoker. A missing key is reported on the first call,
    /// not here, so the REPL can still start and list personas.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn send_request(&self, api_key: &str, body: &GenerateContentRequest) -> Result<String> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| map_transport_error("Gemini API", err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| map_decode_error("Gemini", err))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ModelInvoker for GeminiModelInvoker {
    async fn invoke(&self, messages: &[ChatMessage], temperature: f32) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CoachError::invocation("Gemini API key is not configured")
        })?;

        let request = build_request(messages, temperature)?;
        tracing::debug!(
            model = %self.model,
            contents = request.contents.len(),
            temperature,
            "Sending Gemini request"
        );
        self.send_request(api_key, &request).await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

fn build_request(messages: &[ChatMessage], temperature: f32) -> Result<GenerateContentRequest> {
    let mut system_text: Option<&str> = None;
    let mut contents = Vec::new();

    for message in messages {
        match message.role {
            ChatRole::System if system_text.is_none() && contents.is_empty() => {
                system_text = Some(&message.content);
            }
            ChatRole::System => {
                return Err(CoachError::invocation(
                    "Only one leading system message is supported",
                ));
            }
            ChatRole::User => contents.push(Content::text(Some("user"), &message.content)),
            ChatRole::Assistant => contents.push(Content::text(Some("model"), &message.content)),
        }
    }

    // Gemini rejects requests without contents; a prompt-only request is
    // sent as the user turn itself.
    let system_instruction = match (system_text, contents.is_empty()) {
        (Some(text), true) => {
            contents.push(Content::text(Some("user"), text));
            None
        }
        (Some(text), false) => Some(Content::text(None, text)),
        (None, true) => {
            return Err(CoachError::invocation("Gemini request has no content"));
        }
        (None, false) => None,
    };

    Ok(GenerateContentRequest {
        contents,
        system_instruction,
        generation_config: GenerationConfig { temperature },
    })
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    let text = response
        .candidates
        .and_then(|mut candidates| {
            if candidates.is_empty() {
                None
            } else {
                Some(candidates.remove(0))
            }
        })
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|text| !text.trim().is_empty());

    text.ok_or_else(|| CoachError::invocation("Gemini API returned no text in the response"))
}
