//! Uploaded document model and the extraction contract.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Results with fewer non-whitespace characters than this are probably
/// scans without a text layer.
pub const MIN_READABLE_CHARS: usize = 50;

/// Text pulled out of a document, page by page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Text of every page that produced any, joined with `\n`
    pub text: String,
    /// Number of pages in the source document
    pub page_count: usize,
    /// 1-based numbers of pages that contributed nothing
    pub empty_pages: Vec<usize>,
}

impl ExtractedDocument {
    /// Builds a document from per-page extraction results in page order.
    ///
    /// `None` or whitespace-only pages are skipped and recorded in
    /// `empty_pages`; the rest keep their original order.
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut kept = Vec::new();
        let mut empty_pages = Vec::new();
        let mut page_count = 0;

        for (index, page) in pages.into_iter().enumerate() {
            page_count += 1;
            match page {
                Some(text) if !text.trim().is_empty() => kept.push(text.trim_end().to_string()),
                _ => empty_pages.push(index + 1),
            }
        }

        Self {
            text: kept.join("\n"),
            page_count,
            empty_pages,
        }
    }

    /// Whether the extracted text is too short to be a real report.
    pub fn likely_unreadable(&self) -> bool {
        self.text.chars().filter(|c| !c.is_whitespace()).count() < MIN_READABLE_CHARS
    }

    /// Human-readable warning when the result looks like an image-only scan.
    pub fn warning(&self) -> Option<String> {
        self.likely_unreadable().then(|| {
            format!(
                "Only {} readable characters were found across {} page(s); the PDF may be a scanned image.",
                self.text.chars().filter(|c| !c.is_whitespace()).count(),
                self.page_count
            )
        })
    }
}

/// A document attached to a conversation, with the name it was uploaded as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub name: String,
    pub content: ExtractedDocument,
}

impl UploadedDocument {
    pub fn new(name: impl Into<String>, content: ExtractedDocument) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn text(&self) -> &str {
        &self.content.text
    }
}

/// Turns a binary document payload into text.
pub trait DocumentExtractor: Send + Sync {
    /// Extracts the text of every page in order.
    ///
    /// Fails with [`crate::CoachError::Document`] only when the payload
    /// cannot be opened as a document at all.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_is_skipped_and_order_kept() {
        let doc = ExtractedDocument::from_pages(vec![
            Some("Roof: damaged shingles".to_string()),
            None,
            Some("Plumbing: slow drain".to_string()),
        ]);

        assert_eq!(doc.text, "Roof: damaged shingles\nPlumbing: slow drain");
        assert_eq!(doc.page_count, 3);
        assert_eq!(doc.empty_pages, vec![2]);
    }

    #[test]
    fn test_whitespace_page_counts_as_empty() {
        let doc = ExtractedDocument::from_pages(vec![Some("  \n\t".to_string())]);
        assert!(doc.text.is_empty());
        assert_eq!(doc.empty_pages, vec![1]);
        assert!(doc.likely_unreadable());
    }

    #[test]
    fn test_short_text_flags_warning() {
        let doc = ExtractedDocument::from_pages(vec![Some("Page 1".to_string())]);
        assert!(doc.warning().is_some());

        let long = "Inspection finding ".repeat(10);
        let doc = ExtractedDocument::from_pages(vec![Some(long)]);
        assert!(!doc.likely_unreadable());
        assert!(doc.warning().is_none());
    }
}
