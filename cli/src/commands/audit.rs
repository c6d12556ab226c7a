use std::path::PathBuf;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use snvet_common::config::Config;
use snvet_common::report::DocumentReport;
use snvet_common::{error, success, warn};
use snvet_core::audit::{AuditError, AuditService};
use snvet_formats::DumpFormat;

use crate::commands::source_for;
use crate::terminal::{colors, format, print};

pub async fn audit(
    paths: &[PathBuf],
    format_override: Option<DumpFormat>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let service = AuditService::new(Box::new(source_for(format_override)));

    let spinner: Option<ProgressBar> = start_spinner(paths.len(), cfg);
    let start_time: Instant = Instant::now();
    let results: Vec<Result<DocumentReport, AuditError>> = service.audit_all(paths).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let mut suspicious: usize = 0;
    let mut candidates: usize = 0;
    let mut failed: usize = 0;

    for (idx, result) in results.iter().enumerate() {
        match result {
            Ok(report) => {
                print_report(report, idx, cfg);
                candidates += report.candidates.len();
                suspicious += report.suspicious_count();
            }
            Err(err) => {
                failed += 1;
                print_failure(err, idx);
            }
        }
    }

    if failed == results.len() {
        warn!("no document produced a report");
    }
    print_summary(candidates, suspicious, failed, start_time.elapsed(), cfg);
    Ok(())
}

fn start_spinner(documents: usize, cfg: &Config) -> Option<ProgressBar> {
    if documents < 2 || cfg.quiet > 0 {
        return None;
    }

    let pb: ProgressBar = ProgressBar::new_spinner();
    let style: ProgressStyle = ProgressStyle::with_template("{spinner:.green} {msg}")
        .expect("static spinner template");
    pb.set_style(style);
    pb.set_message(format!("Auditing {documents} documents..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

fn print_report(report: &DocumentReport, idx: usize, cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    print::tree_head(idx, &report.name);
    print::as_tree_one_level(format::report_to_details(report, cfg));
    print::print("");
}

fn print_failure(err: &AuditError, idx: usize) {
    match err {
        AuditError::NoCandidates { document, .. } => {
            error!("[{idx}] {document}: no serial number candidates survived the filter");
        }
        AuditError::Source { source, .. } => {
            error!("[{idx}] {err}: {source:#}");
        }
    }
}

fn print_summary(
    candidates: usize,
    suspicious: usize,
    failed: usize,
    total_time: Duration,
    cfg: &Config,
) {
    let candidates_str: ColoredString = format!("{candidates} candidates").bold().green();
    let suspicious_str: ColoredString = if suspicious > 0 {
        format!("{suspicious} suspicious").bold().red()
    } else {
        "0 suspicious".bold().green()
    };
    let total_time_str: ColoredString =
        format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    let mut output: String = format!(
        "Audit complete: {candidates_str} vetted, {suspicious_str}, in {total_time_str}"
    );
    if failed > 0 {
        let failed_str: ColoredString = format!("{failed} failed").bold().red();
        output = format!("{output} ({failed_str})");
    }
    let output: ColoredString = output.color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            success!("{}", output);
        }
    }
}
