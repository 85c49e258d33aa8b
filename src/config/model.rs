//! Config struct definition and default implementation.

use super::types::*;
use crate::classify::{TierRule, default_tier_rules};
use crate::source::SourceSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for override generation and comparison.
///
/// This struct represents the contents of `kconfig-override.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Option model
    // =========================================================================
    /// Distribution prefix carried by every canonical key (default: "CONFIG_").
    #[serde(default = "default_canonical_prefix")]
    pub canonical_prefix: String,

    // =========================================================================
    // Output
    // =========================================================================
    /// Wrapper placed before every value token (default: "lib.mkForce").
    /// Empty disables it.
    #[serde(default = "default_force_wrapper")]
    pub force_wrapper: String,

    /// First line of the generated header.
    #[serde(default = "default_title")]
    pub title: String,

    /// Explicit version label for the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_label: Option<String>,

    /// Kernel Makefile to derive the version label from when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_makefile: Option<PathBuf>,

    /// Default output path for `generate` (stdout when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Options never emitted, by display or canonical name.
    #[serde(default = "default_excluded_options")]
    pub excluded_options: Vec<String>,

    // =========================================================================
    // Reporting
    // =========================================================================
    /// Ordered tier rules; the first matching prefix wins.
    #[serde(default = "default_tier_rules")]
    pub tier_rules: Vec<TierRule>,

    /// Conflicting keys whose baseline value is recommended over the candidate's.
    #[serde(default = "default_baseline_preferred")]
    pub baseline_preferred: Vec<String>,

    // =========================================================================
    // Sources
    // =========================================================================
    /// Where the candidate (vendor) config text comes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<SourceSpec>,

    /// Where the baseline (distribution) config text comes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<SourceSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canonical_prefix: default_canonical_prefix(),
            force_wrapper: default_force_wrapper(),
            title: default_title(),
            version_label: None,
            kernel_makefile: None,
            output: None,
            excluded_options: default_excluded_options(),
            tier_rules: default_tier_rules(),
            baseline_preferred: default_baseline_preferred(),
            candidate: None,
            baseline: None,
        }
    }
}
