use colored::*;

use snvet_common::config::Config;
use snvet_common::report::{DocumentReport, Verdict};

use crate::terminal::colors;

/// Masks the middle of a serial, keeping the first and last two
/// characters so entries stay distinguishable in a redacted report.
pub fn redact_serial(serial: &str) -> String {
    let chars: Vec<char> = serial.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
}

pub fn serial_display(serial: &str, cfg: &Config) -> String {
    if cfg.redact {
        redact_serial(serial)
    } else {
        serial.to_string()
    }
}

/// The value column for one candidate: `ok` in green, or the fired rule
/// names in red.
pub fn verdict_to_value(verdict: &Verdict) -> ColoredString {
    if verdict.suspicious() {
        format!("suspect ({})", verdict.fired_rules().join(", "))
            .color(colors::SERIAL_SUSPECT)
            .bold()
    } else {
        "ok".color(colors::SERIAL_CLEAN)
    }
}

/// One (key, value) pair per candidate, plus the batch majority line and,
/// when requested, the lines the filter dropped.
pub fn report_to_details(report: &DocumentReport, cfg: &Config) -> Vec<(String, ColoredString)> {
    let mut details: Vec<(String, ColoredString)> = report
        .candidates
        .iter()
        .zip(report.verdicts.iter())
        .map(|(candidate, verdict)| (serial_display(candidate, cfg), verdict_to_value(verdict)))
        .collect();

    let majority: String = format!(
        "{} / {} chars",
        serial_display(&report.stats.majority_prefix, cfg),
        report.stats.majority_length
    );
    details.push(("majority".to_string(), majority.color(colors::ACCENT)));

    if cfg.show_rejected {
        for line in &report.rejected {
            details.push((line.clone(), "rejected".dimmed()));
        }
    }

    details
}
