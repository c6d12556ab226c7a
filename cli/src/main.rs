mod commands;
mod terminal;

use commands::{CommandLine, Commands, audit, extract, rules};
use snvet_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        redact: commands.redact,
        show_rejected: commands.show_rejected,
    };
    let format = commands.format.map(Into::into);

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Audit { paths } => {
            print::header("auditing serial numbers", cfg.quiet);
            audit::audit(&paths, format, &cfg).await
        }
        Commands::Extract { paths } => {
            print::header("extracting candidates", cfg.quiet);
            extract::extract(&paths, format, &cfg).await
        }
        Commands::Rules => {
            print::header("active heuristics", cfg.quiet);
            Ok(rules::rules())
        }
    }
}
