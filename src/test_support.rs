use crate::error::{KconfError, Result};
use crate::render::OverrideMetadata;
use crate::source::SourceProvider;
use chrono::{TimeZone, Utc};

/// Vendor-style export: annotations tool output for an arm64 flavour.
pub(crate) const VENDOR_CONFIG: &str = r#"#
# Automatically generated file; DO NOT EDIT.
#
CONFIG_ARM64=y
CONFIG_NR_CPUS=512
CONFIG_LOCALVERSION="-nvidia"
CONFIG_DRM_NOUVEAU=m
CONFIG_NVIDIA_GRACE=y
CONFIG_SECURITY_YAMA=y
# CONFIG_SECURITY_APPARMOR_RESTRICT_USERNS is not set
CONFIG_EXT4_FS=y
CONFIG_HZ=1000
"#;

/// Distribution baseline in the intermediate `NAME value` notation.
pub(crate) const DISTRO_BASELINE: &str = r#"ARM64 y
NR_CPUS 256
DRM_NOUVEAU m
SECURITY_YAMA y
SECURITY_APPARMOR_RESTRICT_USERNS y
SECURITY_APPARMOR y
USER_NS y
BRIDGE? m
EXT4_FS y
SOUND m
HZ 1000
"#;

pub(crate) fn fixed_metadata() -> OverrideMetadata {
    OverrideMetadata::new(
        "Generated kernel configuration overrides",
        "6.17.1",
        Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap(),
    )
}

/// In-memory provider; `None` simulates a failed fetch.
pub(crate) struct StaticSources {
    pub candidate: Option<String>,
    pub baseline: Option<String>,
}

impl StaticSources {
    pub(crate) fn new(candidate: &str, baseline: &str) -> Self {
        Self {
            candidate: Some(candidate.to_string()),
            baseline: Some(baseline.to_string()),
        }
    }
}

impl SourceProvider for StaticSources {
    fn fetch_candidate_config_text(&self) -> Result<String> {
        self.candidate
            .clone()
            .ok_or_else(|| KconfError::SourceError("candidate unavailable".to_string()))
    }

    fn fetch_baseline_config_text(&self) -> Result<String> {
        self.baseline
            .clone()
            .ok_or_else(|| KconfError::SourceError("baseline unavailable".to_string()))
    }
}
