//! Dump-file adapter for the [`TextSource`] boundary.
//!
//! Reads OCR output that was captured to disk earlier and parses it with
//! `snvet-formats`. This is the only shipped way to reach recognized
//! text; a live recognition client would be another implementation of
//! the same trait.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;

use snvet_common::source::TextSource;
use snvet_formats::DumpFormat;

pub struct FileTextSource {
    /// Forces a dump format instead of deciding by file extension.
    format: Option<DumpFormat>,
}

impl FileTextSource {
    pub fn new() -> Self {
        Self { format: None }
    }

    pub fn with_format(format: DumpFormat) -> Self {
        Self {
            format: Some(format),
        }
    }

    fn format_for(&self, path: &Path) -> DumpFormat {
        self.format.unwrap_or_else(|| DumpFormat::for_path(path))
    }
}

impl Default for FileTextSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextSource for FileTextSource {
    async fn recognize(&self, document: &Path) -> anyhow::Result<Vec<String>> {
        let raw: String = tokio::fs::read_to_string(document)
            .await
            .with_context(|| format!("reading dump file {}", document.display()))?;

        let format: DumpFormat = self.format_for(document);
        let lines: Vec<String> = snvet_formats::parse(format, &raw)
            .with_context(|| format!("parsing dump file {}", document.display()))?;

        Ok(lines)
    }
}
