//! # Audit Service
//!
//! Implements the "vet a document" use case: fetch the recognized lines
//! from the [`TextSource`] collaborator, reduce them to candidates, flag
//! the suspicious ones, and bundle everything into a [`DocumentReport`].
//!
//! The source is injected, never a process-wide client, so tests drive
//! the full pipeline with an in-memory fake. Batches share no state, so
//! multi-document runs fetch sequentially (the collaborator is an
//! external service) and then filter and flag every batch in parallel.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use snvet_common::document::Document;
use snvet_common::report::{BatchStats, DocumentReport, Verdict};
use snvet_common::source::TextSource;

use crate::filter;
use crate::flagger::{self, EmptyBatchError};

#[derive(Debug, Error)]
pub enum AuditError {
    /// The filter kept nothing, so there is no batch to judge. Surfaced
    /// explicitly; a report with made-up statistics would be worse than
    /// no report.
    #[error("document '{document}' produced no serial number candidates")]
    NoCandidates {
        document: String,
        #[source]
        source: EmptyBatchError,
    },

    /// The OCR collaborator itself failed.
    #[error("text source failed for '{document}'")]
    Source {
        document: String,
        #[source]
        source: anyhow::Error,
    },
}

pub struct AuditService {
    source: Box<dyn TextSource>,
}

impl AuditService {
    pub fn new(source: Box<dyn TextSource>) -> Self {
        Self { source }
    }

    /// Audits a single document end to end.
    pub async fn audit(&self, document: &Path) -> Result<DocumentReport, AuditError> {
        let document: Document = self.fetch(document).await?;
        audit_document(document)
    }

    /// Audits every referenced document, yielding one result per input,
    /// in input order. A failing document never aborts its siblings.
    pub async fn audit_all(
        &self,
        documents: &[PathBuf],
    ) -> Vec<Result<DocumentReport, AuditError>> {
        let mut fetched: Vec<Result<Document, AuditError>> = Vec::new();
        for document in documents {
            fetched.push(self.fetch(document).await);
        }

        // Filtering and flagging are pure and per-batch, so the CPU-bound
        // half of the run is embarrassingly parallel.
        fetched
            .into_par_iter()
            .map(|document| document.and_then(audit_document))
            .collect()
    }

    async fn fetch(&self, document: &Path) -> Result<Document, AuditError> {
        let name: String = display_name(document);
        let lines: Vec<String> =
            self.source
                .recognize(document)
                .await
                .map_err(|source| AuditError::Source {
                    document: name.clone(),
                    source,
                })?;

        Ok(Document::new(name, lines))
    }
}

/// The pure half of the pipeline: filter, flag, report.
pub fn audit_document(document: Document) -> Result<DocumentReport, AuditError> {
    let Document { name, lines } = document;

    let (candidates, rejected) = filter::partition_candidates(&lines);
    debug!(
        "document '{}': {} lines, {} candidates",
        name,
        lines.len(),
        candidates.len()
    );

    let (stats, verdicts): (BatchStats, Vec<Verdict>) =
        flagger::assess(&candidates).map_err(|source| AuditError::NoCandidates {
            document: name.clone(),
            source,
        })?;

    Ok(DocumentReport {
        name,
        lines_seen: lines.len(),
        rejected,
        candidates,
        verdicts,
        stats,
    })
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(name: &str, raw: &[&str]) -> Document {
        Document::new(name, raw.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn audit_document_builds_a_full_report() {
        let report = audit_document(document(
            "catalina-4-19-21",
            &[
                "Product Label",
                "CAT4X21-001234",
                "CAT4X21-001235",
                "Date: 4/19/2021",
            ],
        ))
        .unwrap();

        assert_eq!(report.name, "catalina-4-19-21");
        assert_eq!(report.lines_seen, 4);
        assert_eq!(report.candidates.len(), 2);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.stats.majority_prefix, "CAT4X21");
        assert_eq!(report.suspicious_count(), 0);
    }

    #[test]
    fn all_lines_rejected_surfaces_no_candidates() {
        let result = audit_document(document(
            "blank-page",
            &["Product Label", "Inspection Sheet"],
        ));
        assert!(matches!(
            result,
            Err(AuditError::NoCandidates { document, .. }) if document == "blank-page"
        ));
    }

    #[test]
    fn display_name_prefers_the_file_stem() {
        assert_eq!(
            display_name(Path::new("dumps/catalina-4-19-21.json")),
            "catalina-4-19-21"
        );
    }
}
