//! jampzip - zip and unzip commands for the jamp plugin.

mod cli;
mod commands;
mod error;
mod output;
mod prompt;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let formatter =
        output::create_formatter(cli.command.name(), cli.json, cli.verbose, cli.quiet);

    let result = match &cli.command {
        cli::Commands::Zip(args) => commands::zip::execute(args, &*formatter),
        cli::Commands::Unzip(args) => commands::unzip::execute(args, &*formatter),
        cli::Commands::Completion { shell } => {
            commands::completion::execute(*shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}
