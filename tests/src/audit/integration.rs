use std::path::PathBuf;

use snvet_common::report::DocumentReport;
use snvet_core::audit::{AuditError, AuditService};
use snvet_core::fs::FileTextSource;
use snvet_formats::DumpFormat;

use crate::fakes::FakeTextSource;

/// A full pipeline run over a realistic label dump: free text and the
/// date line are filtered out, the duplicate and the short entry are
/// flagged, the regular serials pass.
#[tokio::test]
async fn audit_flags_the_right_entries() {
    let source = FakeTextSource::new().with_document(
        "catalina-4-19-21.txt",
        &[
            "Inspection Sheet",
            "Date: 4/19/2021",
            "CAT4X21-001234",
            "CAT4X21-001235",
            "CAT4X21-001235",
            "CAT4X21-99",
        ],
    );
    let service = AuditService::new(Box::new(source));

    let report: DocumentReport = service
        .audit(&PathBuf::from("catalina-4-19-21.txt"))
        .await
        .unwrap();

    assert_eq!(report.name, "catalina-4-19-21");
    assert_eq!(report.lines_seen, 6);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(
        report.candidates,
        vec![
            "CAT4X21-001234",
            "CAT4X21-001235",
            "CAT4X21-001235",
            "CAT4X21-99",
        ]
    );

    assert_eq!(report.stats.majority_prefix, "CAT4X21");
    assert_eq!(report.stats.majority_length, 14);

    let flags: Vec<bool> = report.verdicts.iter().map(|v| v.suspicious()).collect();
    assert_eq!(flags, vec![false, true, true, true]);
    assert!(report.verdicts[1].duplicate);
    assert!(report.verdicts[2].duplicate);
    assert!(report.verdicts[3].length_mismatch);
    assert_eq!(report.suspicious_count(), 3);
}

/// One failing document must not take down its siblings, and results
/// stay aligned with the inputs.
#[tokio::test]
async fn failing_documents_do_not_abort_the_run() {
    let source = FakeTextSource::new()
        .with_document("good.txt", &["CAT4X21-001234", "CAT4X21-001235"])
        .with_document("free-text.txt", &["Inspection Sheet", "Notes"]);
    let service = AuditService::new(Box::new(source));

    let paths: Vec<PathBuf> = vec![
        PathBuf::from("good.txt"),
        PathBuf::from("missing.txt"),
        PathBuf::from("free-text.txt"),
    ];
    let results = service.audit_all(&paths).await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(AuditError::Source { ref document, .. }) if document == "missing"
    ));
    assert!(matches!(
        results[2],
        Err(AuditError::NoCandidates { ref document, .. }) if document == "free-text"
    ));
}

/// End to end through the dump-file adapter: a block-JSON capture on
/// disk is parsed, filtered and flagged.
#[tokio::test]
async fn audits_a_block_json_dump_from_disk() {
    let dump = r#"{
        "Blocks": [
            {"BlockType": "PAGE"},
            {"BlockType": "LINE", "Text": "Serial Numbers"},
            {"BlockType": "LINE", "Text": "MINI22-04567"},
            {"BlockType": "LINE", "Text": "MINI22-04568"},
            {"BlockType": "LINE", "Text": "MINI22-0456!"},
            {"BlockType": "WORD", "Text": "MINI22-04567"}
        ]
    }"#;

    let path: PathBuf =
        std::env::temp_dir().join(format!("snvet-it-{}.json", std::process::id()));
    tokio::fs::write(&path, dump).await.unwrap();

    let service = AuditService::new(Box::new(FileTextSource::new()));
    let report = service.audit(&path).await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    // The WORD block is not a line and must not inflate the batch.
    assert_eq!(
        report.candidates,
        vec!["MINI22-04567", "MINI22-04568", "MINI22-0456!"]
    );
    let flags: Vec<bool> = report.verdicts.iter().map(|v| v.suspicious()).collect();
    assert_eq!(flags, vec![false, false, true]);
    assert!(report.verdicts[2].irregular_chars);
}

/// The same capture as plain text, with the format forced.
#[tokio::test]
async fn audits_a_plain_dump_with_forced_format() {
    let dump = "Serial Numbers\nMINI22-04567\nMINI22-04568\n";

    let path: PathBuf =
        std::env::temp_dir().join(format!("snvet-it-{}.dump", std::process::id()));
    tokio::fs::write(&path, dump).await.unwrap();

    let service = AuditService::new(Box::new(FileTextSource::with_format(DumpFormat::Plain)));
    let report = service.audit(&path).await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    assert_eq!(report.candidates, vec!["MINI22-04567", "MINI22-04568"]);
    assert_eq!(report.suspicious_count(), 0);
}
