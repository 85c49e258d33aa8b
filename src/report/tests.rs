//! Tests for comparison reporting.

use super::{ComparisonReport, recommended_overrides};
use crate::classify::{classify, default_tier_rules};
use crate::compare::diff;
use crate::config::types::default_baseline_preferred;
use crate::kconfig::parse;
use crate::test_support::{DISTRO_BASELINE, VENDOR_CONFIG};

#[test]
fn test_report_sections() {
    let candidate = parse(VENDOR_CONFIG);
    let baseline = parse(DISTRO_BASELINE);
    let result = diff(&candidate, &baseline);
    let missing = classify(&result.only_in_baseline, &baseline, &default_tier_rules());

    let report = ComparisonReport {
        candidate_label: "vendor.config",
        candidate: &candidate,
        baseline: &baseline,
        diff: &result,
        missing: &missing,
    };
    let text = report.render(false);

    assert!(text.starts_with("# Kernel Configuration Comparison Report\n# Generated for: vendor.config\n"));
    assert!(text.contains("## Missing Baseline Options (4 options)"));
    assert!(text.contains("### CRITICAL - These should likely be preserved:\n  CONFIG_SECURITY_APPARMOR=y\n  CONFIG_USER_NS=y\n"));
    assert!(text.contains("### IMPORTANT - Consider preserving these:\n  CONFIG_BRIDGE=m\n"));
    assert!(text.contains("### OPTIONAL - 1 other options\n(Use --verbose-optional"));
    assert!(!text.contains("CONFIG_SOUND=m"));
    assert!(text.contains("## Conflicting Options (2 options)"));
    assert!(text.contains("  CONFIG_NR_CPUS: candidate=512, baseline=256\n"));
    assert!(text.contains("## Candidate-Specific Options (2 options)"));
}

#[test]
fn test_verbose_lists_optional() {
    let candidate = parse(VENDOR_CONFIG);
    let baseline = parse(DISTRO_BASELINE);
    let result = diff(&candidate, &baseline);
    let missing = classify(&result.only_in_baseline, &baseline, &default_tier_rules());

    let report = ComparisonReport {
        candidate_label: "vendor.config",
        candidate: &candidate,
        baseline: &baseline,
        diff: &result,
        missing: &missing,
    };
    assert!(report.render(true).contains("  CONFIG_SOUND=m\n"));
}

#[test]
fn test_identical_sets_omit_sections() {
    let set = parse("CONFIG_A=y\n");
    let result = diff(&set, &set);
    let missing = classify(&result.only_in_baseline, &set, &default_tier_rules());

    let text = ComparisonReport {
        candidate_label: "a",
        candidate: &set,
        baseline: &set,
        diff: &result,
        missing: &missing,
    }
    .render(false);

    assert!(!text.contains("## Missing"));
    assert!(!text.contains("## Conflicting"));
    assert!(text.contains("## Candidate-Specific Options (0 options)"));
}

#[test]
fn test_summary_serializes_to_json() {
    let candidate = parse("CONFIG_A=y\n");
    let baseline = parse("CONFIG_SECURITY_YAMA=y\n");
    let result = diff(&candidate, &baseline);
    let missing = classify(&result.only_in_baseline, &baseline, &default_tier_rules());
    let report = ComparisonReport {
        candidate_label: "a.config",
        candidate: &candidate,
        baseline: &baseline,
        diff: &result,
        missing: &missing,
    };

    let json = serde_json::to_value(report.summary()).unwrap();
    assert_eq!(json["candidate"], "a.config");
    assert_eq!(json["diff"]["only_in_candidate"][0], "CONFIG_A");
    assert_eq!(json["missing"]["critical"]["CONFIG_SECURITY_YAMA"], "y");
}

#[test]
fn test_recommended_overrides() {
    let candidate = parse(VENDOR_CONFIG);
    let baseline = parse(DISTRO_BASELINE);
    let result = diff(&candidate, &baseline);
    let missing = classify(&result.only_in_baseline, &baseline, &default_tier_rules());

    let text = recommended_overrides(
        &missing,
        &result,
        &baseline,
        &default_baseline_preferred(),
        "CONFIG_",
        Some("lib.mkForce"),
    );

    let expected = "      structuredExtraConfig = with lib.kernel; {
        SECURITY_APPARMOR = yes;
        USER_NS = yes;
        SECURITY_APPARMOR_RESTRICT_USERNS = lib.mkForce yes;
      };";
    assert_eq!(text, expected);
}

#[test]
fn test_no_recommendations() {
    let set = parse("CONFIG_A=y\n");
    let result = diff(&set, &set);
    let missing = classify(&result.only_in_baseline, &set, &default_tier_rules());
    let text = recommended_overrides(&missing, &result, &set, &[], "CONFIG_", None);
    assert_eq!(text, "      # No additional overrides needed");
}
