//! The **abstraction** over the external OCR collaborator.
//!
//! High-level modules depend on this trait, never on a concrete
//! recognition backend. The shipped adapter reads already-captured dump
//! files; tests substitute an in-memory fake. Either way the audit
//! service only ever sees an ordered sequence of recognized lines.

use std::path::Path;

use async_trait::async_trait;

/// A source of recognized text lines, one call per document.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Returns the recognized lines of the referenced document, in
    /// reading order. An empty vector is a valid answer (blank page);
    /// errors mean the collaborator itself failed.
    async fn recognize(&self, document: &Path) -> anyhow::Result<Vec<String>>;
}
