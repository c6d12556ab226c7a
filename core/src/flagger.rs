//! # Anomaly Flagger
//!
//! Judges every candidate of one batch against the batch's own majority
//! statistics. There is no cross-batch state: a batch is its own
//! reference population, which is what makes the heuristic robust across
//! product lines with different serial schemes.
//!
//! Majority values are decided by frequency with a stable first-occurrence
//! tie-break, implemented as an explicit scan in input order. Hash-map
//! iteration order must never decide a tie.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

use snvet_common::report::{BatchStats, Verdict};

/// Number of leading characters compared against the batch majority.
pub const PREFIX_LEN: usize = 7;

/// Majority statistics are undefined on an empty batch.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("empty candidate batch: majority statistics are undefined")]
pub struct EmptyBatchError;

/// The prefix a candidate contributes to the majority vote. A candidate
/// shorter than [`PREFIX_LEN`] contributes its full string, so legitimate
/// short entries can mismatch a majority computed from longer ones. That
/// rough edge is part of the contract, not something to smooth over.
fn prefix_of(candidate: &str) -> String {
    candidate.chars().take(PREFIX_LEN).collect()
}

/// Serial numbers only ever contain ASCII letters, digits and hyphens;
/// anything else is recognizer noise.
fn has_irregular_chars(candidate: &str) -> bool {
    candidate
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '-'))
}

/// The most frequent value, ties resolved in favor of the value that
/// appears first in `values`. Panics on empty input, so callers must
/// check emptiness first; both public entry points do.
fn most_common<T: Eq + Hash>(values: &[T]) -> &T {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Stable scan: only a strictly higher count may displace an earlier
    // value, so the first occurrence of the winning count wins ties.
    let mut best: &T = &values[0];
    let mut best_count: usize = 0;
    for value in values {
        let count: usize = counts[value];
        if count > best_count {
            best = value;
            best_count = count;
        }
    }
    best
}

/// Computes the majority prefix and length of a non-empty batch.
pub fn batch_stats(batch: &[String]) -> Result<BatchStats, EmptyBatchError> {
    if batch.is_empty() {
        return Err(EmptyBatchError);
    }

    let prefixes: Vec<String> = batch.iter().map(|c| prefix_of(c)).collect();
    let lengths: Vec<usize> = batch.iter().map(|c| c.chars().count()).collect();

    Ok(BatchStats {
        majority_prefix: most_common(&prefixes).clone(),
        majority_length: *most_common(&lengths),
    })
}

/// Runs every flag rule over a non-empty batch.
///
/// Returns the batch statistics together with one [`Verdict`] per
/// candidate, in input order. Duplicate detection is batch-wide: both
/// occurrences of a repeated serial are flagged, wherever they sit.
pub fn assess(batch: &[String]) -> Result<(BatchStats, Vec<Verdict>), EmptyBatchError> {
    let stats: BatchStats = batch_stats(batch)?;

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for candidate in batch {
        *occurrences.entry(candidate.as_str()).or_insert(0) += 1;
    }

    let verdicts: Vec<Verdict> = batch
        .iter()
        .map(|candidate| Verdict {
            prefix_mismatch: prefix_of(candidate) != stats.majority_prefix,
            length_mismatch: candidate.chars().count() != stats.majority_length,
            duplicate: occurrences[candidate.as_str()] > 1,
            irregular_chars: has_irregular_chars(candidate),
        })
        .collect();

    Ok((stats, verdicts))
}

/// The plain suspicious-or-not view: one boolean per candidate, in input
/// order. True as soon as any rule fires.
pub fn flag_entries(batch: &[String]) -> Result<Vec<bool>, EmptyBatchError> {
    let (_, verdicts) = assess(batch)?;
    Ok(verdicts.iter().map(Verdict::suspicious).collect())
}
