mod commands;
mod loader;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, lookup};
use iplist_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        strict: commands.strict,
        skip_errors: commands.skip_errors,
    };

    match commands.command {
        Commands::Lookup { list, addrs } => {
            if lookup::lookup(&list, &addrs, &cfg)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Check { list } => {
            check::check(&list, &cfg)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
