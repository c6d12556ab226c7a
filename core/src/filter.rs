//! # Candidate Filter
//!
//! Reduces raw OCR lines to the subsequence plausible as serial numbers.
//!
//! A serial number is expected to be one contiguous alphanumeric token of
//! nontrivial length, so a line qualifies only if it is long enough,
//! mixes digits and letters, and is not obviously free text. One stray
//! space is tolerated because the recognizer occasionally splits a token.
//! Order and duplicates are preserved; the filter is pure and total.

/// A line must have strictly more characters than this to qualify.
pub const MIN_LEN: usize = 8;

/// Maximum number of space characters a candidate may contain.
pub const MAX_SPACES: usize = 1;

/// Lines containing this substring are date labels, never serials.
/// Matched case-sensitively.
pub const DATE_MARKER: &str = "Date";

/// Whether a single recognized line qualifies as a serial number
/// candidate. Lengths are counted in characters, not bytes.
pub fn is_candidate(line: &str) -> bool {
    line.chars().count() > MIN_LEN
        && line.chars().any(|c| c.is_ascii_digit())
        && line.chars().any(char::is_alphabetic)
        && !line.contains(DATE_MARKER)
        && line.matches(' ').count() <= MAX_SPACES
}

/// Keeps the qualifying lines, in input order, duplicates included.
pub fn filter_candidates(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| is_candidate(line))
        .cloned()
        .collect()
}

/// Splits lines into (candidates, rejected), both in input order.
pub fn partition_candidates(lines: &[String]) -> (Vec<String>, Vec<String>) {
    lines
        .iter()
        .cloned()
        .partition(|line| is_candidate(line))
}
