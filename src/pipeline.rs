//! End-to-end flows over a [`SourceProvider`].
//!
//! These are the two modes of the tool, expressed over already-configured
//! parts: fetch both texts, parse, diff, then either render the force set or
//! classify what the candidate leaves out.

use crate::classify::{ClassifiedOptions, classify};
use crate::compare::{DiffResult, diff};
use crate::config::Config;
use crate::error::Result;
use crate::kconfig::ConfigSet;
use crate::render::{OverrideMetadata, RenderedOverrides};
use crate::report::ComparisonReport;
use crate::source::SourceProvider;
use std::collections::BTreeSet;
use tracing::debug;

/// Parsed inputs and results of a comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub candidate: ConfigSet,
    pub baseline: ConfigSet,
    pub diff: DiffResult,
    /// Tiers of the baseline-only options.
    pub missing: ClassifiedOptions,
}

impl Comparison {
    /// Fetch, parse and compare both sources.
    pub fn fetch(provider: &dyn SourceProvider, config: &Config) -> Result<Self> {
        let parser = config.parser();
        let candidate = parser.parse(&provider.fetch_candidate_config_text()?);
        let baseline = parser.parse(&provider.fetch_baseline_config_text()?);
        debug!(
            candidate = candidate.len(),
            baseline = baseline.len(),
            "parsed configs"
        );

        Ok(Self::from_sets(candidate, baseline, config))
    }

    /// Compare two already-parsed sets.
    pub fn from_sets(candidate: ConfigSet, baseline: ConfigSet, config: &Config) -> Self {
        let diff = diff(&candidate, &baseline);
        let missing = classify(&diff.only_in_baseline, &baseline, &config.tier_rules);
        Self {
            candidate,
            baseline,
            diff,
            missing,
        }
    }

    /// Report view over this comparison.
    pub fn report<'a>(&'a self, candidate_label: &'a str) -> ComparisonReport<'a> {
        ComparisonReport {
            candidate_label,
            candidate: &self.candidate,
            baseline: &self.baseline,
            diff: &self.diff,
            missing: &self.missing,
        }
    }
}

/// Override-generation mode: render the candidate options the baseline lacks
/// or disagrees with.
pub fn generate_terse(
    provider: &dyn SourceProvider,
    config: &Config,
    metadata: &OverrideMetadata,
) -> Result<RenderedOverrides> {
    let comparison = Comparison::fetch(provider, config)?;
    let forced = comparison.diff.forced_options(&comparison.candidate);
    debug!(
        forced = forced.len(),
        baseline_only = comparison.diff.only_in_baseline.len(),
        "computed force set"
    );

    Ok(config
        .serializer()
        .render(&forced, &config.excluded_set(), metadata))
}

/// Full mode: render every candidate option without consulting a baseline.
///
/// Exclusions do not apply; the result mirrors the candidate exactly.
pub fn generate_full(
    provider: &dyn SourceProvider,
    config: &Config,
    metadata: &OverrideMetadata,
) -> Result<RenderedOverrides> {
    let candidate = config
        .parser()
        .parse(&provider.fetch_candidate_config_text()?);

    Ok(config
        .serializer()
        .render(&candidate, &BTreeSet::new(), metadata))
}
