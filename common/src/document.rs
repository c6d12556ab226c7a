//! # Document Model
//!
//! A document is one processed image: a name (usually the dump file stem)
//! and the ordered text lines the OCR collaborator recognized on it.
//! Batches are independent of each other; nothing here carries state
//! across documents.

/// One recognized document worth of OCR output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Display name, typically derived from the dump file.
    pub name: String,
    /// Recognized text lines, in reading order as the OCR service
    /// reported them.
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}
