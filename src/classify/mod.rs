//! Importance tiers for options a candidate does not set.
//!
//! Rules are an ordered list of `(prefix, tier)` pairs supplied as data. A key
//! takes the tier of the first rule whose prefix it starts with, so critical
//! rules must come before looser important ones. Keys matching no rule are
//! optional.

mod rules;


pub use rules::{default_tier_rules, default_tier_rules_for};

use crate::kconfig::ConfigSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Severity tier for human triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Critical,
    Important,
    Optional,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Critical => write!(f, "critical"),
            Tier::Important => write!(f, "important"),
            Tier::Optional => write!(f, "optional"),
        }
    }
}

/// One prefix rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRule {
    /// Matched against the canonical key (prefix included).
    pub prefix: String,
    pub tier: Tier,
}

impl TierRule {
    pub fn new(prefix: impl Into<String>, tier: Tier) -> Self {
        Self {
            prefix: prefix.into(),
            tier,
        }
    }
}

/// A partition of a key set into tiers.
///
/// Each map holds key -> baseline raw value, for reporting. A key missing
/// from the baseline maps to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedOptions {
    pub critical: BTreeMap<String, String>,
    pub important: BTreeMap<String, String>,
    pub optional: BTreeMap<String, String>,
}

impl ClassifiedOptions {
    pub fn len(&self) -> usize {
        self.critical.len() + self.important.len() + self.optional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tier of a single key under the first-match-wins rule.
pub fn tier_of(key: &str, rules: &[TierRule]) -> Tier {
    rules
        .iter()
        .find(|rule| key.starts_with(rule.prefix.as_str()))
        .map(|rule| rule.tier)
        .unwrap_or(Tier::Optional)
}

/// Partition `keys` into tiers, carrying each key's baseline value.
pub fn classify(
    keys: &BTreeSet<String>,
    baseline: &ConfigSet,
    rules: &[TierRule],
) -> ClassifiedOptions {
    let mut classified = ClassifiedOptions::default();

    for key in keys {
        let value = baseline
            .get(key)
            .map(|option| option.raw.clone())
            .unwrap_or_default();

        let bucket = match tier_of(key, rules) {
            Tier::Critical => &mut classified.critical,
            Tier::Important => &mut classified.important,
            Tier::Optional => &mut classified.optional,
        };
        bucket.insert(key.clone(), value);
    }

    classified
}
