mod support;

use agentcoach_core::document::DocumentExtractor;
use agentcoach_infrastructure::LopdfExtractor;
use support::build_pdf;

#[test]
fn test_extracts_pages_in_order() {
    let bytes = build_pdf(&[
        Some("Exterior gutters are loose"),
        Some("Roofing shingles are damaged"),
        Some("Plumbing drain is slow"),
        Some("Electrical panel lacks labels"),
        Some("HVAC unit is near end of life"),
    ]);

    let document = LopdfExtractor::new()
        .extract(&bytes)
        .expect("valid PDF should extract");

    assert_eq!(document.page_count, 5);
    assert!(document.empty_pages.is_empty());
    let gutters = document.text.find("Exterior gutters").unwrap();
    let hvac = document.text.find("HVAC unit").unwrap();
    assert!(gutters < hvac);
}

#[test]
fn test_blank_page_is_omitted_and_neighbours_kept() {
    let bytes = build_pdf(&[
        Some("Page one finding"),
        None,
        Some("Page three finding"),
    ]);

    let document = LopdfExtractor::new().extract(&bytes).unwrap();

    assert_eq!(document.page_count, 3);
    assert_eq!(document.empty_pages, vec![2]);
    let first = document.text.find("Page one finding").unwrap();
    let third = document.text.find("Page three finding").unwrap();
    assert!(first < third);
}

#[test]
fn test_image_only_document_is_flagged_not_rejected() {
    let bytes = build_pdf(&[None, None]);

    let document = LopdfExtractor::new().extract(&bytes).unwrap();

    assert!(document.text.trim().is_empty());
    assert!(document.likely_unreadable());
    assert!(document.warning().is_some());
}

#[test]
fn test_garbage_payload_is_document_error() {
    let err = LopdfExtractor::new()
        .extract(b"this is not a pdf at all")
        .unwrap_err();
    assert!(err.is_document());
}
