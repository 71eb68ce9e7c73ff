//! PDF text extraction backed by lopdf.

use agentcoach_core::document::{DocumentExtractor, ExtractedDocument};
use agentcoach_core::error::{CoachError, Result};
use lopdf::Document;

/// Extracts text page by page.
///
/// Pages that yield no text (image-only scans, unsupported fonts) are
/// skipped instead of failing the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for LopdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| CoachError::document(format!("Failed to open PDF: {e}")))?;

        if doc.is_encrypted() {
            return Err(CoachError::document(
                "PDF is password protected. Please provide an unencrypted version.",
            ));
        }

        let pages = doc.get_pages();
        let texts = pages.keys().map(|&page_number| {
            match doc.extract_text(&[page_number]) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::debug!(page = page_number, error = %e, "page yielded no text");
                    None
                }
            }
        });

        let extracted = ExtractedDocument::from_pages(texts);
        tracing::info!(
            pages = extracted.page_count,
            empty_pages = extracted.empty_pages.len(),
            chars = extracted.text.len(),
            "extracted PDF text"
        );
        Ok(extracted)
    }
}
