//! Config loading, validation, and derived helpers.

use super::model::Config;
use crate::classify::{default_tier_rules, default_tier_rules_for};
use crate::error::{KconfError, Result};
use crate::kconfig::{ConfigParser, DEFAULT_PREFIX, is_option_name};
use crate::render::OverrideSerializer;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

/// A Nix function reference such as `lib.mkForce` or `lib.mkOverride 50`.
static FORCE_WRAPPER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_'-]*(\.[A-Za-z_][A-Za-z0-9_'-]*)*( [0-9]+)?$")
        .expect("Invalid force wrapper regex")
});

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "kconfig-override.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(KconfError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            KconfError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the named config, or the default file when it exists, or built-in defaults.
    ///
    /// An explicitly named file must exist.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    /// When only the prefix is customized, the built-in tier rules follow it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| KconfError::UserError(format!("failed to parse config YAML: {}", e)))?;

        if config.canonical_prefix != DEFAULT_PREFIX && config.tier_rules == default_tier_rules() {
            config.tier_rules = default_tier_rules_for(&config.canonical_prefix);
        }

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            KconfError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `canonical_prefix` must be a non-empty identifier
    /// - `force_wrapper` must be empty or a Nix function reference
    /// - `excluded_options` entries must be non-empty identifiers
    /// - `tier_rules` prefixes must be non-empty
    /// - each source must name exactly one of `file` / `command`
    ///
    /// A tier rule outside `canonical_prefix` can never match; it is logged,
    /// not rejected.
    pub fn validate(&self) -> Result<()> {
        if !is_option_name(&self.canonical_prefix) {
            return Err(KconfError::UserError(format!(
                "config validation failed: canonical_prefix must contain only letters, digits and '_' (found '{}')",
                self.canonical_prefix
            )));
        }

        let wrapper = self.force_wrapper.trim();
        if !wrapper.is_empty() && !FORCE_WRAPPER_REGEX.is_match(wrapper) {
            return Err(KconfError::UserError(format!(
                "config validation failed: force_wrapper '{}' is not a Nix function reference (e.g. 'lib.mkForce')",
                self.force_wrapper
            )));
        }

        for name in &self.excluded_options {
            if !is_option_name(name) {
                return Err(KconfError::UserError(format!(
                    "config validation failed: excluded_options entry '{}' is not an option name",
                    name
                )));
            }
        }

        for (index, rule) in self.tier_rules.iter().enumerate() {
            if rule.prefix.is_empty() {
                return Err(KconfError::UserError(format!(
                    "config validation failed: tier_rules[{}] has an empty prefix",
                    index
                )));
            }
            if !rule.prefix.starts_with(&self.canonical_prefix) {
                warn!(
                    prefix = %rule.prefix,
                    canonical_prefix = %self.canonical_prefix,
                    "tier rule can never match: prefix lacks the canonical prefix"
                );
            }
        }

        if let Some(spec) = &self.candidate {
            spec.validate("candidate")?;
        }
        if let Some(spec) = &self.baseline {
            spec.validate("baseline")?;
        }

        Ok(())
    }

    /// Exclusion list as a set.
    pub fn excluded_set(&self) -> BTreeSet<String> {
        self.excluded_options.iter().cloned().collect()
    }

    /// Parser for this config's canonical prefix.
    pub fn parser(&self) -> ConfigParser {
        ConfigParser::new(&self.canonical_prefix)
    }

    /// Serializer for this config's prefix and force wrapper.
    pub fn serializer(&self) -> OverrideSerializer {
        OverrideSerializer::new(&self.canonical_prefix).with_force_wrapper(&self.force_wrapper)
    }
}
