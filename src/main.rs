//! kconfig-override: minimal kernel config overrides from a vendor config and a
//! distribution baseline.
//!
//! This is the main entry point for the `kconfig-override` CLI. It parses
//! arguments, installs logging, dispatches to the command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use kconfig_override::exit_codes;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match commands::dispatch(cli.command, cli.config.as_deref()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
