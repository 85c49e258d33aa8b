//! Recommended `structuredExtraConfig` overrides for a comparison.

use crate::classify::ClassifiedOptions;
use crate::compare::DiffResult;
use crate::kconfig::{ConfigOption, ConfigSet, display_name};
use crate::render::statement;
use std::fmt::Write;

const INDENT: &str = "        ";

/// Overrides that restore critical baseline options and keep the baseline's
/// value for preferred conflicts.
///
/// Critical missing options are rendered as plain statements; preferred
/// conflicts are wrapped in `force_wrapper` so they win over the candidate.
pub fn recommended_overrides(
    missing: &ClassifiedOptions,
    diff: &DiffResult,
    baseline: &ConfigSet,
    baseline_preferred: &[String],
    prefix: &str,
    force_wrapper: Option<&str>,
) -> String {
    let mut lines = Vec::new();

    for (key, value) in &missing.critical {
        let option = ConfigOption::new(key.as_str(), value.as_str());
        lines.push(format!(
            "{}{}",
            INDENT,
            statement(display_name(key, prefix), &option, None)
        ));
    }

    for key in diff
        .conflicting
        .iter()
        .filter(|key| baseline_preferred.contains(*key))
    {
        if let Some(option) = baseline.get(key) {
            lines.push(format!(
                "{}{}",
                INDENT,
                statement(display_name(key, prefix), option, force_wrapper)
            ));
        }
    }

    if lines.is_empty() {
        return "      # No additional overrides needed".to_string();
    }

    let mut out = String::from("      structuredExtraConfig = with lib.kernel; {\n");
    for line in lines {
        let _ = writeln!(out, "{}", line);
    }
    out.push_str("      };");
    out
}
