//! Error mapping shared by the Gemini REST clients.

use agentcoach_core::CoachError;
use reqwest::StatusCode;
use serde::Deserialize;

pub(crate) const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Turns a non-success response into an invocation error.
///
/// Prefers the `status: message` pair of a Gemini error body and falls
/// back to the raw body text.
pub(crate) fn map_http_error(status: StatusCode, body: &str) -> CoachError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.to_string());

    CoachError::invocation_with_status(status.as_u16(), message)
}

/// Reports a failed send. The URL is stripped so error text stays safe to
/// log and to paste into prompts.
pub(crate) fn map_transport_error(context: &str, err: reqwest::Error) -> CoachError {
    CoachError::invocation(format!("{context} request failed: {}", err.without_url()))
}

pub(crate) fn map_decode_error(context: &str, err: reqwest::Error) -> CoachError {
    CoachError::invocation(format!(
        "Failed to parse {context} response: {}",
        err.without_url()
    ))
}
