mod support;

use std::sync::{Arc, Mutex};
use std::thread::ThreadId;

use agentcoach_core::document::{DocumentExtractor, ExtractedDocument};
use agentcoach_core::error::Result;
use agentcoach_core::knowledge::{KnowledgeBase, KnowledgeLoader};
use agentcoach_infrastructure::{DirectoryKnowledgeLoader, LopdfExtractor};
use support::build_pdf;
use tempfile::TempDir;

fn loader(root: &std::path::Path) -> DirectoryKnowledgeLoader {
    DirectoryKnowledgeLoader::new(root, Arc::new(LopdfExtractor::new()))
}

/// Records the thread each extraction runs on.
#[derive(Default)]
struct ThreadRecordingExtractor {
    threads: Mutex<Vec<ThreadId>>,
}

impl DocumentExtractor for ThreadRecordingExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<ExtractedDocument> {
        self.threads.lock().unwrap().push(std::thread::current().id());
        Ok(ExtractedDocument::from_pages([Some("Escrow closes in 30 days".to_string())]))
    }
}

#[tokio::test]
async fn test_missing_directory_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let text = loader(temp_dir.path()).load(KnowledgeBase::Coaching).await;
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_reads_text_and_pdf_files() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("contracts_kb");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("a_option_period.txt"), "Option period is 10 days.").unwrap();
    std::fs::write(
        dir.join("b_addendum.pdf"),
        build_pdf(&[Some("Seller financing addendum rules")]),
    )
    .unwrap();
    std::fs::write(dir.join("c_photo.jpg"), [0xFFu8, 0xD8, 0xFF]).unwrap();
    std::fs::create_dir(dir.join("nested")).unwrap();
    std::fs::write(dir.join("nested").join("deep.txt"), "should not be read").unwrap();

    let text = loader(temp_dir.path()).load(KnowledgeBase::Contracts).await;

    assert!(text.contains("### a_option_period.txt\nOption period is 10 days."));
    assert!(text.contains("### b_addendum.pdf"));
    assert!(text.contains("Seller financing addendum rules"));
    assert!(!text.contains("c_photo.jpg"));
    assert!(!text.contains("should not be read"));
    assert!(text.find("a_option_period").unwrap() < text.find("b_addendum").unwrap());
}

#[tokio::test]
async fn test_unreadable_files_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("knowledge_base");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("broken.pdf"), b"not really a pdf").unwrap();
    std::fs::write(dir.join("invalid_utf8.txt"), [0xC3u8, 0x28]).unwrap();
    std::fs::write(dir.join("weekly_plan.md"), "Call 20 past clients every Monday.").unwrap();

    let text = loader(temp_dir.path()).load(KnowledgeBase::Coaching).await;

    assert_eq!(text, "### weekly_plan.md\nCall 20 past clients every Monday.");
}

#[tokio::test]
async fn test_reloads_on_every_call() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("knowledge_base");
    std::fs::create_dir(&dir).unwrap();
    let loader = loader(temp_dir.path());

    std::fs::write(dir.join("one.txt"), "first version").unwrap();
    assert!(loader.load(KnowledgeBase::Coaching).await.contains("first version"));

    std::fs::write(dir.join("one.txt"), "second version").unwrap();
    assert!(loader.load(KnowledgeBase::Coaching).await.contains("second version"));
}

#[tokio::test]
async fn test_pdf_extraction_runs_off_the_runtime_thread() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("contracts_kb");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("escrow.pdf"), b"%PDF-1.7").unwrap();
    std::fs::write(dir.join("notes.txt"), "Earnest money is due in 3 days.").unwrap();

    let extractor = Arc::new(ThreadRecordingExtractor::default());
    let loader = DirectoryKnowledgeLoader::new(temp_dir.path(), extractor.clone());
    let text = loader.load(KnowledgeBase::Contracts).await;

    assert!(text.contains("### escrow.pdf\nEscrow closes in 30 days"));
    assert!(text.contains("### notes.txt\nEarnest money is due in 3 days."));
    let threads = extractor.threads.lock().unwrap();
    assert_eq!(threads.len(), 1);
    assert_ne!(threads[0], std::thread::current().id());
}
