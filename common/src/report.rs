//! # Audit Report Model
//!
//! Output types produced by the audit pipeline: per-entry verdicts, the
//! batch-wide majority statistics they were judged against, and the
//! per-document report that bundles both.

/// Majority statistics of one candidate batch.
///
/// Both values are decided by frequency, with ties resolved in favor of
/// the value seen first in batch order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchStats {
    /// Most frequent leading-characters value across the batch.
    pub majority_prefix: String,
    /// Most frequent character count across the batch.
    pub majority_length: usize,
}

/// The outcome of every flag rule for a single candidate.
///
/// A candidate is suspicious as soon as any one rule fires; the
/// individual outcomes are kept so reports can say which one did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Prefix differs from the batch majority prefix.
    pub prefix_mismatch: bool,
    /// Character count differs from the batch majority length.
    pub length_mismatch: bool,
    /// The exact string occurs more than once anywhere in the batch.
    pub duplicate: bool,
    /// Contains a character outside ASCII letters, digits and hyphen.
    pub irregular_chars: bool,
}

impl Verdict {
    pub fn suspicious(&self) -> bool {
        self.prefix_mismatch || self.length_mismatch || self.duplicate || self.irregular_chars
    }

    /// Short labels of the rules that fired, for report printing.
    pub fn fired_rules(&self) -> Vec<&'static str> {
        let mut rules: Vec<&'static str> = Vec::new();
        if self.prefix_mismatch {
            rules.push("prefix");
        }
        if self.length_mismatch {
            rules.push("length");
        }
        if self.duplicate {
            rules.push("duplicate");
        }
        if self.irregular_chars {
            rules.push("charset");
        }
        rules
    }
}

/// Full audit result for one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentReport {
    /// Display name of the audited document.
    pub name: String,
    /// Number of raw lines the OCR collaborator reported.
    pub lines_seen: usize,
    /// Lines the candidate filter dropped, in input order.
    pub rejected: Vec<String>,
    /// Serial number candidates, in input order, duplicates kept.
    pub candidates: Vec<String>,
    /// One verdict per candidate, same order as `candidates`.
    pub verdicts: Vec<Verdict>,
    /// The majority statistics the verdicts were judged against.
    pub stats: BatchStats,
}

impl DocumentReport {
    /// Number of candidates at least one flag rule fired for.
    pub fn suspicious_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.suspicious()).count()
    }
}
