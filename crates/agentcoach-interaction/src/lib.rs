//! Clients for the hosted Gemini API: chat completion and grounded search.

pub mod gemini_api_agent;
mod http;
pub mod web_search;

pub use gemini_api_agent::GeminiModelInvoker;
pub use web_search::GeminiWebSearch;
