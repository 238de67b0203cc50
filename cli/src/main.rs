mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, generate, show};
use crtgen_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.quiet);

    let result: anyhow::Result<()> = match commands.command.unwrap_or_default() {
        Commands::Generate => {
            print::header("generating sessions", cfg.quiet);
            generate::generate(&cfg)
        }
        Commands::Show => {
            print::header("session hierarchy", cfg.quiet);
            show::show(&cfg)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
