pub mod audit;
pub mod extract;
pub mod rules;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use snvet_core::fs::FileTextSource;
use snvet_formats::DumpFormat;

#[derive(Parser)]
#[command(name = "snvet")]
#[command(about = "Vets serial numbers extracted from document images by OCR.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Mask the middle of printed serial numbers
    #[arg(long, global = true)]
    pub redact: bool,

    /// Also list the lines the filter dropped
    #[arg(long, global = true)]
    pub show_rejected: bool,

    /// Force a dump format instead of deciding by file extension
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and flag serial numbers in captured OCR dumps
    #[command(alias = "a")]
    Audit {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the serial number candidates in captured OCR dumps
    #[command(alias = "e")]
    Extract {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Show the active filter thresholds and flag rules
    #[command(alias = "r")]
    Rules,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Blocks,
    Plain,
}

impl From<FormatArg> for DumpFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Blocks => DumpFormat::Blocks,
            FormatArg::Plain => DumpFormat::Plain,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// The dump-file adapter every subcommand reads documents through.
pub(crate) fn source_for(format: Option<DumpFormat>) -> FileTextSource {
    match format {
        Some(format) => FileTextSource::with_format(format),
        None => FileTextSource::new(),
    }
}
