//! Option triples and the option map.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How an option value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `y`
    Enabled,
    /// `n`, or the `is not set` comment form.
    Disabled,
    /// `m`
    Module,
    /// A double-quoted value; the raw text keeps its quotes.
    StringLiteral,
    /// A value made only of ASCII digits.
    NumericLiteral,
    /// Anything else (hex values, negative numbers, bare words).
    OpaqueToken,
}

impl ValueKind {
    /// Classify a raw value. Total: every string maps to exactly one kind.
    pub fn of(raw: &str) -> Self {
        match raw {
            "y" => ValueKind::Enabled,
            "n" => ValueKind::Disabled,
            "m" => ValueKind::Module,
            _ if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') => {
                ValueKind::StringLiteral
            }
            _ if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
                ValueKind::NumericLiteral
            }
            _ => ValueKind::OpaqueToken,
        }
    }
}

/// A single `(key, kind, raw)` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Canonical key, including the distribution prefix.
    pub key: String,
    pub kind: ValueKind,
    /// Value exactly as it appeared in the source text.
    pub raw: String,
}

impl ConfigOption {
    /// Build an option, deriving the kind from the raw value.
    pub fn new(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            key: key.into(),
            kind: ValueKind::of(&raw),
            raw,
        }
    }

    /// Build a compiled-out option (`n`).
    pub fn disabled(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: ValueKind::Disabled,
            raw: "n".to_string(),
        }
    }
}

/// Map from canonical key to option.
///
/// Backed by a `BTreeMap` so iteration is always in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigSet {
    options: BTreeMap<String, ConfigOption>,
}

impl ConfigSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing any earlier option with the same key.
    pub fn insert(&mut self, option: ConfigOption) {
        self.options.insert(option.key.clone(), option);
    }

    pub fn get(&self, key: &str) -> Option<&ConfigOption> {
        self.options.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn key_set(&self) -> BTreeSet<String> {
        self.options.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigOption> {
        self.options.values()
    }

    /// The options whose keys are in `keys`. Keys absent from this set are ignored.
    pub fn subset(&self, keys: &BTreeSet<String>) -> ConfigSet {
        keys.iter()
            .filter_map(|k| self.options.get(k))
            .cloned()
            .collect()
    }
}

impl FromIterator<ConfigOption> for ConfigSet {
    fn from_iter<I: IntoIterator<Item = ConfigOption>>(iter: I) -> Self {
        let mut set = ConfigSet::new();
        for option in iter {
            set.insert(option);
        }
        set
    }
}
