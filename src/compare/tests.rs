//! Tests for config comparison.

use super::{DiffResult, diff};
use crate::kconfig::{ConfigOption, ConfigSet, parse};
use std::collections::BTreeSet;

fn keys(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_identical_configs() {
    let set = parse("CONFIG_FOO=y\nCONFIG_BAR=m\n# CONFIG_BAZ is not set\n");
    let result = diff(&set, &set);

    assert!(result.only_in_candidate.is_empty());
    assert!(result.only_in_baseline.is_empty());
    assert!(result.conflicting.is_empty());
    assert!(result.force_set().is_empty());
    assert!(result.is_empty());
}

#[test]
fn test_candidate_only_options() {
    let candidate = parse("CONFIG_FOO=y\nCONFIG_NEW=m\n");
    let baseline = parse("CONFIG_FOO=y\n");
    let result = diff(&candidate, &baseline);

    assert_eq!(result.only_in_candidate, keys(&["CONFIG_NEW"]));
    assert_eq!(result.force_set(), keys(&["CONFIG_NEW"]));
}

#[test]
fn test_baseline_only_options_are_not_forced() {
    let candidate = parse("CONFIG_FOO=y\n");
    let baseline = parse("CONFIG_FOO=y\nCONFIG_APPARMOR=y\n");
    let result = diff(&candidate, &baseline);

    assert_eq!(result.only_in_baseline, keys(&["CONFIG_APPARMOR"]));
    assert!(result.force_set().is_empty());
}

#[test]
fn test_conflicting_values() {
    let candidate = parse("CONFIG_FOO=y\nCONFIG_BAR=m\nCONFIG_HZ=250\n");
    let baseline = parse("CONFIG_FOO=m\nCONFIG_BAR=m\nCONFIG_HZ=\"250\"\n");
    let result = diff(&candidate, &baseline);

    // Kind participates in inequality: 250 and "250" differ.
    assert_eq!(result.conflicting, keys(&["CONFIG_FOO", "CONFIG_HZ"]));
    assert!(result.only_in_candidate.is_empty());
}

#[test]
fn test_not_set_matches_explicit_n() {
    let candidate = parse("# CONFIG_FOO is not set\n");
    let baseline = parse("CONFIG_FOO=n\n");
    assert!(diff(&candidate, &baseline).is_empty());
}

#[test]
fn test_force_set_is_union() {
    let candidate = parse("CONFIG_A=y\nCONFIG_B=y\nCONFIG_C=y\n");
    let baseline = parse("CONFIG_B=m\nCONFIG_C=y\nCONFIG_D=y\n");
    let result = diff(&candidate, &baseline);

    assert_eq!(result.force_set(), keys(&["CONFIG_A", "CONFIG_B"]));

    let forced = result.forced_options(&candidate);
    assert_eq!(forced.len(), 2);
    assert_eq!(forced.get("CONFIG_B").unwrap().raw, "y");
}

#[test]
fn test_partition_property() {
    let a = parse("CONFIG_A=y\nCONFIG_B=m\nCONFIG_C=\"x\"\nCONFIG_E=1\n");
    let b = parse("CONFIG_B=y\nCONFIG_C=\"x\"\nCONFIG_D=n\nCONFIG_E=2\n");
    let result = diff(&a, &b);

    let DiffResult {
        only_in_candidate,
        only_in_baseline,
        conflicting,
    } = &result;

    assert!(only_in_candidate.is_disjoint(only_in_baseline));
    assert!(only_in_candidate.is_disjoint(conflicting));
    assert!(only_in_baseline.is_disjoint(conflicting));

    // Agreeing keys are the only ones outside the three sets.
    let covered: BTreeSet<String> = only_in_candidate
        .iter()
        .chain(only_in_baseline)
        .chain(conflicting)
        .cloned()
        .collect();
    let all: BTreeSet<String> = a.key_set().union(&b.key_set()).cloned().collect();
    let agreeing = keys(&["CONFIG_C"]);
    assert_eq!(
        covered,
        all.difference(&agreeing).cloned().collect::<BTreeSet<_>>()
    );
}

#[test]
fn test_empty_baseline_forces_everything() {
    let text = "CONFIG_FOO=y\nCONFIG_BAR=m\n# CONFIG_BAZ is not set\nCONFIG_VERSION=\"6.17.1\"\nCONFIG_NUM=42\n";
    let candidate = parse(text);
    let result = diff(&candidate, &ConfigSet::new());

    let expected = keys(&[
        "CONFIG_FOO",
        "CONFIG_BAR",
        "CONFIG_BAZ",
        "CONFIG_VERSION",
        "CONFIG_NUM",
    ]);
    assert_eq!(result.only_in_candidate, expected);
    assert_eq!(result.force_set(), expected);
}

#[test]
fn test_direction_matters() {
    let a: ConfigSet = [ConfigOption::new("CONFIG_X", "y")].into_iter().collect();
    let b = ConfigSet::new();
    assert_eq!(diff(&a, &b).only_in_candidate, keys(&["CONFIG_X"]));
    assert_eq!(diff(&b, &a).only_in_baseline, keys(&["CONFIG_X"]));
}
