//! Retrieval of config text for the candidate and baseline.
//!
//! The core never reads files or runs tools. Callers fetch both texts through
//! a [`SourceProvider`] and hand the resolved strings to the parser.
//!
//! [`ConfiguredSources`] implements the provider from two [`SourceSpec`]s:
//! a plain file, or an export command whose stdout is either the config text
//! or a path to it, optionally cached on disk between runs.

mod cache;
mod command;
mod spec;


pub use command::{ToolOutput, run_tool};
pub use spec::{OutputMode, SourceRole, SourceSpec};

use crate::error::{KconfError, Result};

/// Capability to produce the two config texts the core compares.
pub trait SourceProvider {
    /// Text of the candidate (vendor) config.
    fn fetch_candidate_config_text(&self) -> Result<String>;

    /// Text of the baseline (distribution default) config.
    fn fetch_baseline_config_text(&self) -> Result<String>;
}

/// Provider backed by the `candidate` and `baseline` specs of the config file.
#[derive(Debug, Clone)]
pub struct ConfiguredSources {
    pub candidate: Option<SourceSpec>,
    pub baseline: Option<SourceSpec>,
}

impl ConfiguredSources {
    pub fn new(candidate: Option<SourceSpec>, baseline: Option<SourceSpec>) -> Self {
        Self {
            candidate,
            baseline,
        }
    }

    fn fetch(spec: Option<&SourceSpec>, role: SourceRole) -> Result<String> {
        let spec = spec.ok_or_else(|| {
            KconfError::UserError(format!(
                "no {role} source configured\nFix: pass --{role} <file> or add a '{role}' section to the config file."
            ))
        })?;
        spec.fetch(role)
    }
}

impl SourceProvider for ConfiguredSources {
    fn fetch_candidate_config_text(&self) -> Result<String> {
        Self::fetch(self.candidate.as_ref(), SourceRole::Candidate)
    }

    fn fetch_baseline_config_text(&self) -> Result<String> {
        Self::fetch(self.baseline.as_ref(), SourceRole::Baseline)
    }
}
