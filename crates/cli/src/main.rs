use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};

mod commands;
mod printer;

use commands::Cli;
use filemgr_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            return ExitCode::from(1);
        }
    };

    let Some(command) = cli.command else {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::from(1);
    };

    command.run(&cli.output)
}
