//! Plain-text dump parsing: one recognized line per row.

/// Splits a plain dump into recognized lines. Blank rows are layout
/// artifacts of the dump file, not OCR output, and are skipped; interior
/// whitespace is preserved because the filter heuristics depend on it.
pub fn extract_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_rows_and_keeps_interior_spaces() {
        let raw = "CAT4X21-001234\n\n  \nSN 12345678\n";
        assert_eq!(extract_lines(raw), vec!["CAT4X21-001234", "SN 12345678"]);
    }

    #[test]
    fn handles_crlf_dumps() {
        let raw = "CAT4X21-001234\r\nCAT4X21-001235\r\n";
        assert_eq!(
            extract_lines(raw),
            vec!["CAT4X21-001234", "CAT4X21-001235"]
        );
    }
}
