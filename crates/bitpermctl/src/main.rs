mod cli;
mod commands;
mod error;
mod logging;
mod mask;

use std::io::Write;
use std::process::ExitCode;

use bitperm::{load_table, PermissionRegistry};
use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;
use crate::error::CliError;

fn registry(cli: &Cli) -> Result<PermissionRegistry<'static>, CliError> {
    match &cli.table {
        Some(path) => {
            let table = load_table(path)?;
            print_debug!("loaded {} permissions from {}", table.len(), path.display());
            Ok(PermissionRegistry::new(table))
        }
        None => Ok(PermissionRegistry::default()),
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let registry = registry(cli)?;
    let lines = commands::run(&cli.command, &registry)?;

    let mut stdout = std::io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup(cli.verbose, cli.no_color) {
        // No logger to report through.
        let _ = writeln!(std::io::stderr(), "failed to set up logger: {e}");
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
