//! Parsers for captured OCR dump files.
//!
//! The audit pipeline never talks to a recognition service directly; it
//! consumes dumps that were captured earlier. Two shapes are supported:
//! the vendor's block-JSON response and plain newline-separated text.

pub mod blocks;
pub mod plain;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The dump is not valid block JSON.
    #[error("malformed block dump")]
    Json(#[from] serde_json::Error),

    /// A LINE block carried no text payload.
    #[error("block {index} is a LINE block without text")]
    MissingText { index: usize },
}

/// Supported dump file shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpFormat {
    /// Vendor block-JSON response (`Blocks` array).
    Blocks,
    /// Newline-separated recognized lines.
    Plain,
}

impl DumpFormat {
    /// Picks the format from the file extension: `.json` means block
    /// JSON, everything else is treated as plain text.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => DumpFormat::Blocks,
            _ => DumpFormat::Plain,
        }
    }
}

/// Parses a raw dump into recognized lines, in reading order.
pub fn parse(format: DumpFormat, raw: &str) -> Result<Vec<String>, FormatError> {
    match format {
        DumpFormat::Blocks => blocks::extract_lines(raw),
        DumpFormat::Plain => Ok(plain::extract_lines(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(
            DumpFormat::for_path(Path::new("scan-01.json")),
            DumpFormat::Blocks
        );
        assert_eq!(
            DumpFormat::for_path(Path::new("scan-01.txt")),
            DumpFormat::Plain
        );
        assert_eq!(DumpFormat::for_path(Path::new("scan-01")), DumpFormat::Plain);
    }
}
