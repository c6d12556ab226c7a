use std::path::PathBuf;

use snvet_common::config::Config;
use snvet_common::source::TextSource;
use snvet_common::{info, warn};
use snvet_core::filter;
use snvet_formats::DumpFormat;

use crate::commands::source_for;
use crate::terminal::{format, print};

/// Runs only the candidate filter and prints what it kept, one serial
/// per line so the output stays pipe-friendly.
pub async fn extract(
    paths: &[PathBuf],
    format_override: Option<DumpFormat>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let source = source_for(format_override);
    let mut total: usize = 0;

    for (idx, path) in paths.iter().enumerate() {
        let lines: Vec<String> = source.recognize(path).await?;
        let candidates: Vec<String> = filter::filter_candidates(&lines);

        if cfg.quiet == 0 {
            print::tree_head(idx, &path.display().to_string());
        }
        if candidates.is_empty() {
            warn!("{}: no serial number candidates", path.display());
            continue;
        }
        total += candidates.len();
        for candidate in &candidates {
            print::print(&format::serial_display(candidate, cfg));
        }
    }

    if cfg.quiet == 0 {
        info!("{} candidates across {} documents", total, paths.len());
    }
    Ok(())
}
