//! Directory-backed knowledge loader.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use agentcoach_core::document::DocumentExtractor;
use agentcoach_core::knowledge::{KnowledgeBase, KnowledgeLoader};
use async_trait::async_trait;

use crate::paths::AgentCoachPaths;

/// Consecutive `read_dir` failures after which the scan gives up.
const MAX_ENTRY_ERRORS: usize = 8;

/// Reads every `.txt`, `.md` and `.pdf` file of a knowledge directory.
///
/// Non-recursive. Files are visited in file-name order and each one is
/// introduced by a `### <file name>` header. Unreadable files are skipped.
pub struct DirectoryKnowledgeLoader {
    root: PathBuf,
    extractor: Arc<dyn DocumentExtractor>,
}

impl DirectoryKnowledgeLoader {
    pub fn new(root: impl Into<PathBuf>, extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self {
            root: root.into(),
            extractor,
        }
    }

    /// Concatenates the readable files of `dir`; empty when `dir` is missing.
    pub async fn load_dir(&self, dir: &Path) -> String {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "knowledge directory not readable");
                return String::new();
            }
        };

        let mut files = Vec::new();
        let mut errors = 0;
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    errors += 1;
                    tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    if errors >= MAX_ENTRY_ERRORS {
                        break;
                    }
                    continue;
                }
            };
            errors = 0;
            let is_file = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            if is_file {
                files.push(entry.path());
            }
        }
        files.sort();

        let mut sections = Vec::new();
        for path in files {
            if let Some(text) = self.read_file(&path).await {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                sections.push(format!("### {name}\n{}", text.trim()));
            }
        }

        tracing::debug!(dir = %dir.display(), files = sections.len(), "loaded knowledge");
        sections.join("\n\n")
    }

    async fn read_file(&self, path: &Path) -> Option<String> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())?;

        let text = match extension.as_str() {
            "txt" | "md" => tokio::fs::read_to_string(path).await.ok()?,
            "pdf" => {
                let bytes = tokio::fs::read(path).await.ok()?;
                let extractor = Arc::clone(&self.extractor);
                let extracted =
                    tokio::task::spawn_blocking(move || extractor.extract(&bytes)).await;
                match extracted {
                    Ok(Ok(document)) => document.text,
                    Ok(Err(e)) => {
                        tracing::warn!(file = %path.display(), error = %e, "skipping unreadable knowledge PDF");
                        return None;
                    }
                    Err(e) => {
                        tracing::warn!(file = %path.display(), error = %e, "knowledge PDF extraction aborted");
                        return None;
                    }
                }
            }
            _ => return None,
        };

        (!text.trim().is_empty()).then_some(text)
    }
}

#[async_trait]
impl KnowledgeLoader for DirectoryKnowledgeLoader {
    async fn load(&self, base: KnowledgeBase) -> String {
        let dir = AgentCoachPaths::knowledge_dir(&self.root, base);
        self.load_dir(&dir).await
    }
}
