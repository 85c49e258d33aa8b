//! Built-in tier rules for container-capable, general-purpose kernels.

use super::{Tier, TierRule};
use crate::kconfig::DEFAULT_PREFIX;

// Option names without the distribution prefix.
const CRITICAL_NAMES: &[&str] = &["SECURITY_", "NAMESPACES", "USER_NS", "CGROUPS", "MEMCG"];

const IMPORTANT_NAMES: &[&str] = &[
    "NETFILTER",
    "BRIDGE",
    "OVERLAY_FS",
    "EXT4_FS",
    "VIRTUALIZATION",
    "KVM",
];

/// Default ordered rule list for the `CONFIG_` prefix.
pub fn default_tier_rules() -> Vec<TierRule> {
    default_tier_rules_for(DEFAULT_PREFIX)
}

/// Default ordered rule list under `prefix`: every critical rule, then every
/// important one.
pub fn default_tier_rules_for(prefix: &str) -> Vec<TierRule> {
    let rule = |name: &&str, tier| TierRule::new(format!("{}{}", prefix, name), tier);
    CRITICAL_NAMES
        .iter()
        .map(|name| rule(name, Tier::Critical))
        .chain(IMPORTANT_NAMES.iter().map(|name| rule(name, Tier::Important)))
        .collect()
}
