//! Command implementations for kconfig-override.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod compare;
mod generate;

use crate::cli::{Command, SourceArgs};
use kconfig_override::config::Config;
use kconfig_override::error::{KconfError, Result};
use kconfig_override::source::{ConfiguredSources, SourceSpec};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args, &Config::resolve(config_path)?),
        Command::Compare(args) => compare::cmd_compare(args, &Config::resolve(config_path)?),
        Command::Defaults => cmd_defaults(),
    }
}

fn cmd_defaults() -> Result<()> {
    print!("{}", Config::default().to_yaml()?);
    Ok(())
}

/// Configured sources with any `--candidate` / `--baseline` file overrides applied.
fn resolve_sources(args: &SourceArgs, config: &Config) -> ConfiguredSources {
    let candidate = match &args.candidate {
        Some(path) => Some(SourceSpec::file(path)),
        None => config.candidate.clone(),
    };
    let baseline = match &args.baseline {
        Some(path) => Some(SourceSpec::file(path)),
        None => config.baseline.clone(),
    };
    ConfiguredSources::new(candidate, baseline)
}

/// Human label for the candidate: its file or command.
fn candidate_label(sources: &ConfiguredSources) -> String {
    match &sources.candidate {
        Some(SourceSpec {
            file: Some(path), ..
        }) => path.display().to_string(),
        Some(SourceSpec {
            command: Some(command),
            ..
        }) => command.clone(),
        _ => "<unconfigured>".to_string(),
    }
}

fn read_file(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        KconfError::UserError(format!(
            "failed to read {} '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}
