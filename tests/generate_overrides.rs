//! End-to-end tests of override generation through the public library API.

use chrono::{TimeZone, Utc};
use kconfig_override::config::Config;
use kconfig_override::error::{KconfError, Result};
use kconfig_override::pipeline::{Comparison, generate_terse};
use kconfig_override::render::OverrideMetadata;
use kconfig_override::source::{ConfiguredSources, SourceProvider, SourceSpec};
use std::fs;
use tempfile::TempDir;

struct InMemory {
    candidate: &'static str,
    baseline: &'static str,
}

impl SourceProvider for InMemory {
    fn fetch_candidate_config_text(&self) -> Result<String> {
        Ok(self.candidate.to_string())
    }

    fn fetch_baseline_config_text(&self) -> Result<String> {
        Ok(self.baseline.to_string())
    }
}

fn metadata() -> OverrideMetadata {
    OverrideMetadata::new(
        "Generated NVIDIA DGX Spark kernel configuration (terse)",
        "6.17.1",
        Utc.with_ymd_and_hms(2025, 11, 2, 9, 15, 0).unwrap(),
    )
}

const VENDOR: &str = "\
CONFIG_ARM64=y
CONFIG_9P_FS=m
CONFIG_NR_CPUS=512
CONFIG_CMDLINE=\"console=ttyAMA0\"
CONFIG_GCC_VERSION=130300
# CONFIG_DEBUG_INFO_BTF is not set
CONFIG_SECURITY_YAMA=y
";

const BASELINE: &str = "\
ARM64 y
NR_CPUS 256
DEBUG_INFO_BTF y
SECURITY_YAMA y
SECURITY_APPARMOR y
";

#[test]
fn terse_overrides_match_expected_file() {
    let sources = InMemory {
        candidate: VENDOR,
        baseline: BASELINE,
    };
    let rendered = generate_terse(&sources, &Config::default(), &metadata()).unwrap();

    let expected = "\
# Generated NVIDIA DGX Spark kernel configuration (terse)
# Kernel Version: 6.17.1
# Generated: 2025-11-02 09:15:00 UTC
#
# Total options: 4

{ lib }: with lib.kernel; {
  \"9P_FS\" = lib.mkForce module;
  CMDLINE = lib.mkForce (freeform \"console=ttyAMA0\");
  DEBUG_INFO_BTF = lib.mkForce no;
  NR_CPUS = lib.mkForce (freeform \"512\");
}
";
    assert_eq!(rendered.text, expected);
    assert_eq!(rendered.count, 4);
}

#[test]
fn regeneration_is_byte_identical() {
    let sources = InMemory {
        candidate: VENDOR,
        baseline: BASELINE,
    };
    let config = Config::default();
    let first = generate_terse(&sources, &config, &metadata()).unwrap();
    let second = generate_terse(&sources, &config, &metadata()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn file_sources_from_yaml_config() {
    let dir = TempDir::new().unwrap();
    let vendor = dir.path().join("vendor.config");
    let baseline = dir.path().join("baseline.config");
    fs::write(&vendor, VENDOR).unwrap();
    fs::write(&baseline, BASELINE).unwrap();

    let yaml = format!(
        "force_wrapper: \"\"\nexcluded_options: [NR_CPUS]\ncandidate:\n  file: {}\nbaseline:\n  file: {}\n",
        vendor.display(),
        baseline.display()
    );
    let config = Config::from_yaml(&yaml).unwrap();
    let sources = ConfiguredSources::new(config.candidate.clone(), config.baseline.clone());

    let rendered = generate_terse(&sources, &config, &metadata()).unwrap();
    assert_eq!(rendered.count, 4);
    assert!(rendered.text.contains("  GCC_VERSION = (freeform \"130300\");\n"));
    assert!(!rendered.text.contains("NR_CPUS"));

    let comparison = Comparison::fetch(&sources, &config).unwrap();
    assert!(
        comparison
            .missing
            .critical
            .contains_key("CONFIG_SECURITY_APPARMOR")
    );
}

#[test]
fn missing_candidate_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let sources = ConfiguredSources::new(
        Some(SourceSpec::file(dir.path().join("absent.config"))),
        None,
    );
    let err = generate_terse(&sources, &Config::default(), &metadata()).unwrap_err();
    assert!(matches!(err, KconfError::UserError(_)));
    assert!(err.to_string().contains("candidate"));
}

#[test]
fn missing_baseline_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let vendor = dir.path().join("vendor.config");
    fs::write(&vendor, VENDOR).unwrap();

    let sources = ConfiguredSources::new(
        Some(SourceSpec::file(&vendor)),
        Some(SourceSpec::file(dir.path().join("absent.config"))),
    );
    let err = generate_terse(&sources, &Config::default(), &metadata()).unwrap_err();
    assert!(matches!(err, KconfError::UserError(_)));
    assert!(err.to_string().contains("failed to read baseline config"));
    assert!(err.to_string().contains("absent.config"));
}
