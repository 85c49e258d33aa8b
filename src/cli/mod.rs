//! CLI argument parsing for kconfig-override.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kconfig-override: minimal kernel config overrides from a vendor config and a
/// distribution baseline.
///
/// The candidate (vendor) config is compared against the baseline
/// (distribution defaults); only options the baseline lacks or disagrees
/// with are written out.
#[derive(Parser, Debug)]
#[command(name = "kconfig-override")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./kconfig-override.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for kconfig-override.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an override file.
    ///
    /// Fetches both configs, keeps the candidate options the baseline lacks
    /// or sets differently, drops excluded options, and writes the result.
    Generate(GenerateArgs),

    /// Compare a candidate config against the baseline.
    ///
    /// Reports baseline options the candidate leaves out (by importance),
    /// conflicting values, and candidate-specific options.
    Compare(CompareArgs),

    /// Print the default configuration as YAML.
    Defaults,
}

/// Source overrides shared by `generate` and `compare`.
#[derive(clap::Args, Debug, Default)]
pub struct SourceArgs {
    /// Read the candidate config from this file instead of the configured source.
    #[arg(long)]
    pub candidate: Option<PathBuf>,

    /// Read the baseline config from this file instead of the configured source.
    #[arg(long)]
    pub baseline: Option<PathBuf>,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output path (default: config `output`, or stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Version label for the header (overrides config and kernel Makefile).
    #[arg(long)]
    pub version_label: Option<String>,

    /// Render every candidate option without comparing against a baseline.
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the `compare` command.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// List every optional missing option.
    #[arg(long)]
    pub verbose_optional: bool,

    /// Append recommended structuredExtraConfig overrides.
    #[arg(long)]
    pub recommend: bool,

    /// Print the comparison as JSON.
    #[arg(long, conflicts_with_all = ["verbose_optional", "recommend"])]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["kconfig-override", "defaults"]).unwrap();
        assert!(matches!(cli.command, Command::Defaults));
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_generate_minimal() {
        let cli = Cli::try_parse_from(["kconfig-override", "generate"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert!(args.output.is_none());
            assert!(args.sources.candidate.is_none());
            assert!(!args.full);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "kconfig-override",
            "generate",
            "--candidate",
            "vendor.config",
            "--baseline",
            "nixos.config",
            "-o",
            "kernel-configs/nvidia-dgx-spark-6.17.1.nix",
            "--version-label",
            "6.17.1",
            "--config",
            "custom.yaml",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.sources.candidate, Some(PathBuf::from("vendor.config")));
            assert_eq!(args.sources.baseline, Some(PathBuf::from("nixos.config")));
            assert_eq!(
                args.output,
                Some(PathBuf::from("kernel-configs/nvidia-dgx-spark-6.17.1.nix"))
            );
            assert_eq!(args.version_label.as_deref(), Some("6.17.1"));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_compare_flags() {
        let cli = Cli::try_parse_from(["kconfig-override", "compare", "--recommend"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert!(args.recommend);
            assert!(!args.json);
        } else {
            panic!("Expected Compare command");
        }
    }

    #[test]
    fn json_conflicts_with_text_options() {
        let result =
            Cli::try_parse_from(["kconfig-override", "compare", "--json", "--recommend"]);
        assert!(result.is_err());
    }
}
