//! In-memory stand-ins for the OCR collaborator.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use snvet_common::source::TextSource;

/// Serves canned recognition results keyed by document path. Unknown
/// documents fail, like a real collaborator asked for a missing image.
pub struct FakeTextSource {
    documents: HashMap<PathBuf, Vec<String>>,
}

impl FakeTextSource {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    pub fn with_document(mut self, path: &str, lines: &[&str]) -> Self {
        self.documents.insert(
            PathBuf::from(path),
            lines.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl TextSource for FakeTextSource {
    async fn recognize(&self, document: &Path) -> anyhow::Result<Vec<String>> {
        self.documents
            .get(document)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such document: {}", document.display()))
    }
}
