//! Implementation of the `kconfig-override compare` command.

use super::{candidate_label, resolve_sources};
use crate::cli::CompareArgs;
use kconfig_override::config::Config;
use kconfig_override::error::{KconfError, Result};
use kconfig_override::pipeline::Comparison;
use kconfig_override::report::recommended_overrides;

pub fn cmd_compare(args: CompareArgs, config: &Config) -> Result<()> {
    let sources = resolve_sources(&args.sources, config);
    let label = candidate_label(&sources);
    let comparison = Comparison::fetch(&sources, config)?;
    let report = comparison.report(&label);

    if args.json {
        let json = serde_json::to_string_pretty(&report.summary()).map_err(|e| {
            KconfError::OutputError(format!("failed to serialize comparison to JSON: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", report.render(args.verbose_optional));

    if args.recommend {
        let wrapper = (!config.force_wrapper.trim().is_empty())
            .then_some(config.force_wrapper.as_str());
        println!();
        println!("## Recommended Configuration Overrides:");
        println!("```nix");
        println!(
            "{}",
            recommended_overrides(
                &comparison.missing,
                &comparison.diff,
                &comparison.baseline,
                &config.baseline_preferred,
                &config.canonical_prefix,
                wrapper,
            )
        );
        println!("```");
    }

    Ok(())
}
