//! Block-JSON dump parsing.
//!
//! The document-text-detection vendor answers with a flat `Blocks` array
//! mixing PAGE, LINE and WORD entries. Only LINE blocks carry the
//! recognized lines the audit cares about; WORD blocks repeat the same
//! text token by token and PAGE blocks carry layout only.

use serde::Deserialize;
use tracing::debug;

use crate::FormatError;

#[derive(Debug, Deserialize)]
struct DetectTextDump {
    #[serde(rename = "Blocks")]
    blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
struct Block {
    #[serde(rename = "BlockType")]
    block_type: String,
    #[serde(rename = "Text")]
    text: Option<String>,
}

/// Extracts the LINE block texts from a raw block-JSON dump, preserving
/// array order. Blocks of any other type are skipped; a LINE block
/// without a text payload is an error rather than a silent gap.
pub fn extract_lines(raw: &str) -> Result<Vec<String>, FormatError> {
    let dump: DetectTextDump = serde_json::from_str(raw)?;

    let mut lines: Vec<String> = Vec::new();
    let mut skipped: usize = 0;
    for (index, block) in dump.blocks.into_iter().enumerate() {
        if block.block_type != "LINE" {
            skipped += 1;
            continue;
        }
        match block.text {
            Some(text) => lines.push(text),
            None => return Err(FormatError::MissingText { index }),
        }
    }

    debug!(
        "extracted {} lines, skipped {} non-LINE blocks",
        lines.len(),
        skipped
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_line_blocks_in_order() {
        let raw = r#"{
            "Blocks": [
                {"BlockType": "PAGE"},
                {"BlockType": "LINE", "Text": "Serial Numbers"},
                {"BlockType": "WORD", "Text": "Serial"},
                {"BlockType": "WORD", "Text": "Numbers"},
                {"BlockType": "LINE", "Text": "CAT4X21-001234"}
            ]
        }"#;

        let lines = extract_lines(raw).unwrap();
        assert_eq!(lines, vec!["Serial Numbers", "CAT4X21-001234"]);
    }

    #[test]
    fn empty_blocks_array_yields_no_lines() {
        let lines = extract_lines(r#"{"Blocks": []}"#).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn line_without_text_is_an_error() {
        let raw = r#"{"Blocks": [{"BlockType": "LINE"}]}"#;
        assert!(matches!(
            extract_lines(raw),
            Err(FormatError::MissingText { index: 0 })
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            extract_lines("{\"Blocks\": "),
            Err(FormatError::Json(_))
        ));
        // A dump without a Blocks array is malformed too.
        assert!(matches!(extract_lines("{}"), Err(FormatError::Json(_))));
    }
}
