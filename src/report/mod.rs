//! Human-readable comparison report and recommended overrides.
//!
//! Used by `compare`. The report lists baseline options the candidate does
//! not set (by tier), conflicting values, and how many options are specific
//! to the candidate.

mod recommend;

#[cfg(test)]
mod tests;

pub use recommend::recommended_overrides;

use crate::classify::ClassifiedOptions;
use crate::compare::DiffResult;
use crate::kconfig::ConfigSet;
use serde::Serialize;
use std::fmt::Write;

/// Everything a comparison report needs.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonReport<'a> {
    /// Label for the candidate (usually its path).
    pub candidate_label: &'a str,
    pub candidate: &'a ConfigSet,
    pub baseline: &'a ConfigSet,
    pub diff: &'a DiffResult,
    /// Tiers of `diff.only_in_baseline`.
    pub missing: &'a ClassifiedOptions,
}

impl ComparisonReport<'_> {
    /// Render the report. With `verbose`, optional options are listed too.
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# Kernel Configuration Comparison Report");
        let _ = writeln!(out, "# Generated for: {}", self.candidate_label);
        let _ = writeln!(out, "# Total candidate options: {}", self.candidate.len());
        let _ = writeln!(out, "# Total baseline options: {}", self.baseline.len());
        out.push('\n');

        if !self.diff.only_in_baseline.is_empty() {
            self.render_missing(&mut out, verbose);
        }

        if !self.diff.conflicting.is_empty() {
            let _ = writeln!(
                out,
                "## Conflicting Options ({} options)",
                self.diff.conflicting.len()
            );
            out.push_str("The following options have different values:\n\n");
            for key in &self.diff.conflicting {
                let _ = writeln!(
                    out,
                    "  {}: candidate={}, baseline={}",
                    key,
                    raw_value(self.candidate, key),
                    raw_value(self.baseline, key)
                );
            }
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "## Candidate-Specific Options ({} options)",
            self.diff.only_in_candidate.len()
        );
        out.push_str("These options are set by the candidate but absent from the baseline.\n");

        out
    }

    fn render_missing(&self, out: &mut String, verbose: bool) {
        let _ = writeln!(
            out,
            "## Missing Baseline Options ({} options)",
            self.diff.only_in_baseline.len()
        );
        out.push_str("The following baseline options are not present in the candidate:\n\n");

        if !self.missing.critical.is_empty() {
            out.push_str("### CRITICAL - These should likely be preserved:\n");
            for (key, value) in &self.missing.critical {
                let _ = writeln!(out, "  {}={}", key, value);
            }
            out.push('\n');
        }

        if !self.missing.important.is_empty() {
            out.push_str("### IMPORTANT - Consider preserving these:\n");
            for (key, value) in &self.missing.important {
                let _ = writeln!(out, "  {}={}", key, value);
            }
            out.push('\n');
        }

        if !self.missing.optional.is_empty() {
            let _ = writeln!(
                out,
                "### OPTIONAL - {} other options",
                self.missing.optional.len()
            );
            if verbose {
                for (key, value) in &self.missing.optional {
                    let _ = writeln!(out, "  {}={}", key, value);
                }
            } else {
                out.push_str("(Use --verbose-optional to see all optional options)\n");
            }
            out.push('\n');
        }
    }

    /// Machine-readable form of the same data.
    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            candidate: self.candidate_label,
            candidate_options: self.candidate.len(),
            baseline_options: self.baseline.len(),
            diff: self.diff,
            missing: self.missing,
        }
    }
}

/// JSON shape of a comparison.
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub candidate: &'a str,
    pub candidate_options: usize,
    pub baseline_options: usize,
    pub diff: &'a DiffResult,
    pub missing: &'a ClassifiedOptions,
}

fn raw_value<'a>(set: &'a ConfigSet, key: &str) -> &'a str {
    set.get(key).map(|option| option.raw.as_str()).unwrap_or("")
}
