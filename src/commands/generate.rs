//! Implementation of the `kconfig-override generate` command.
//!
//! 1. Resolve sources (config file, then `--candidate` / `--baseline`)
//! 2. Resolve the version label (flag, config, or kernel Makefile)
//! 3. Fetch, parse, diff and render the force set (or every option with `--full`)
//! 4. Write atomically to the output path, or print to stdout

use super::{read_file, resolve_sources};
use crate::cli::GenerateArgs;
use chrono::Utc;
use kconfig_override::config::Config;
use kconfig_override::error::Result;
use kconfig_override::fs::atomic_write_file;
use kconfig_override::kernel_version;
use kconfig_override::pipeline::{generate_full, generate_terse};
use kconfig_override::render::OverrideMetadata;
use tracing::{info, warn};

/// Label used when no version source is available.
const UNKNOWN_VERSION: &str = "unknown";

pub fn cmd_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let sources = resolve_sources(&args.sources, config);
    let version_label = resolve_version_label(args.version_label, config)?;

    let mut metadata = OverrideMetadata::new(&config.title, &version_label, Utc::now())
        .with_field(
            "Generator",
            format!("kconfig-override {}", env!("CARGO_PKG_VERSION")),
        );

    let rendered = if args.full {
        generate_full(&sources, config, &metadata)?
    } else {
        metadata = metadata
            .with_note("This file contains only options that differ from the baseline.")
            .with_note("Options matching the baseline are omitted for clarity.");
        generate_terse(&sources, config, &metadata)?
    };

    match args.output.or_else(|| config.output.clone()) {
        Some(path) => {
            atomic_write_file(&path, &rendered.text)?;
            info!(path = %path.display(), count = rendered.count, "wrote overrides");
            eprintln!(
                "Generated {} with {} options",
                path.display(),
                rendered.count
            );
        }
        None => {
            print!("{}", rendered.text);
            eprintln!("Generated {} options", rendered.count);
        }
    }

    Ok(())
}

fn resolve_version_label(flag: Option<String>, config: &Config) -> Result<String> {
    if let Some(label) = flag.or_else(|| config.version_label.clone()) {
        return Ok(label);
    }

    if let Some(makefile) = &config.kernel_makefile {
        let text = read_file(makefile, "kernel Makefile")?;
        match kernel_version::from_makefile(&text) {
            Some(version) => return Ok(version),
            None => warn!(
                path = %makefile.display(),
                "kernel Makefile has no VERSION/PATCHLEVEL/SUBLEVEL"
            ),
        }
    }

    warn!("no version label configured; using '{}'", UNKNOWN_VERSION);
    Ok(UNKNOWN_VERSION.to_string())
}
