//! Web search capability.
//!
//! Search results are treated as unstructured text that is pasted straight
//! into a prompt. Providers never fail towards the caller: an unavailable
//! provider or a transport error becomes sentinel text, so the assembler
//! always has something to interpolate.

use async_trait::async_trait;

/// Query suffix appended for news-style searches.
pub const NEWS_QUERY_SUFFIX: &str = "news development opening businesses events last 6 months";

/// How a raw query is augmented before it reaches the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// Query is sent unchanged
    General,
    /// Recent local news, openings and events
    News,
    /// Restricted to a single social platform via a `site:` filter
    Social { site: String },
}

impl SearchIntent {
    pub fn social(site: impl Into<String>) -> Self {
        Self::Social { site: site.into() }
    }

    /// Applies this intent's augmentation strategy to `query`.
    pub fn augment(&self, query: &str) -> String {
        let query = query.trim();
        match self {
            SearchIntent::General => query.to_string(),
            SearchIntent::News => format!("{query} {NEWS_QUERY_SUFFIX}"),
            SearchIntent::Social { site } => format!("{query} site:{site}"),
        }
    }

    /// Short label used in the assembled results block.
    pub fn label(&self) -> String {
        match self {
            SearchIntent::General => "web".to_string(),
            SearchIntent::News => "news".to_string(),
            SearchIntent::Social { site } => site.clone(),
        }
    }
}

/// Builds the sentinel text used in place of unavailable search results.
pub fn unavailable_notice(reason: &str) -> String {
    format!("[Web search unavailable: {reason}]")
}

/// Returns true when `text` is a sentinel produced by [`unavailable_notice`].
pub fn is_unavailable_notice(text: &str) -> bool {
    text.starts_with("[Web search unavailable:")
}

/// Free-text web search.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs `query` augmented by `intent` and returns the result blob.
    ///
    /// Implementations must not fail; they return sentinel text instead.
    async fn search(&self, query: &str, intent: &SearchIntent) -> String;
}

/// Provider used when web search is not configured.
#[derive(Debug, Clone)]
pub struct NullSearchProvider {
    reason: String,
}

impl NullSearchProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for NullSearchProvider {
    fn default() -> Self {
        Self::new("search provider not configured")
    }
}

#[async_trait]
impl SearchProvider for NullSearchProvider {
    async fn search(&self, query: &str, intent: &SearchIntent) -> String {
        tracing::debug!(query = %intent.augment(query), "web search skipped: provider not configured");
        unavailable_notice(&self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_intent_appends_suffix() {
        let query = SearchIntent::News.augment("  Round Rock TX ");
        assert_eq!(
            query,
            "Round Rock TX news development opening businesses events last 6 months"
        );
    }

    #[test]
    fn test_social_intent_adds_site_filter() {
        let query = SearchIntent::social("instagram.com").augment("austin realtor");
        assert_eq!(query, "austin realtor site:instagram.com");
    }

    #[test]
    fn test_general_intent_is_passthrough() {
        assert_eq!(SearchIntent::General.augment("zillow"), "zillow");
    }

    #[tokio::test]
    async fn test_null_provider_returns_sentinel() {
        let provider = NullSearchProvider::new("no API key");
        let text = provider.search("anything", &SearchIntent::General).await;
        assert_eq!(text, "[Web search unavailable: no API key]");
        assert!(is_unavailable_notice(&text));
    }
}
