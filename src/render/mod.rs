//! Override file rendering.
//!
//! Produces a Nix `lib.kernel` attribute set with one statement per forced
//! option, preceded by a comment header carrying the supplied metadata:
//!
//! ```text
//! # Generated kernel configuration overrides
//! # Kernel Version: 6.17.1
//! # Generated: 2025-01-01 00:00:00 UTC
//! #
//! # Total options: 2
//!
//! { lib }: with lib.kernel; {
//!   FOO = yes;
//!   "9P_FS" = module;
//! }
//! ```
//!
//! Output depends only on the arguments: keys are sorted by display name and
//! the timestamp comes from the metadata, never from the clock.

mod metadata;
mod statement;


pub use metadata::OverrideMetadata;
pub use statement::{attribute_name, statement, value_expression};

use crate::kconfig::{ConfigOption, ConfigSet, DEFAULT_PREFIX, display_name};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Opening line of the attribute set body.
pub const BODY_OPEN: &str = "{ lib }: with lib.kernel; {";

/// Rendered override text plus the number of statements it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOverrides {
    pub text: String,
    pub count: usize,
}

/// Serializer for override files.
#[derive(Debug, Clone)]
pub struct OverrideSerializer {
    prefix: String,
    force_wrapper: Option<String>,
}

impl Default for OverrideSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl OverrideSerializer {
    /// Serializer stripping `prefix` from displayed names, with no force wrapper.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            force_wrapper: None,
        }
    }

    /// Place `wrapper` (e.g. `lib.mkForce`) before every value token.
    pub fn with_force_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        let wrapper = wrapper.into();
        self.force_wrapper = (!wrapper.trim().is_empty()).then_some(wrapper);
        self
    }

    /// Render `overrides`, skipping excluded keys.
    ///
    /// An entry in `excluded` matches either the canonical key or the display
    /// name, so `MODULE_SIG_KEY` and `CONFIG_MODULE_SIG_KEY` both exclude the
    /// same option.
    pub fn render(
        &self,
        overrides: &ConfigSet,
        excluded: &BTreeSet<String>,
        metadata: &OverrideMetadata,
    ) -> RenderedOverrides {
        let mut entries: Vec<(&str, &ConfigOption)> = overrides
            .iter()
            .map(|option| (display_name(&option.key, &self.prefix), option))
            .filter(|(name, option)| !excluded.contains(*name) && !excluded.contains(&option.key))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.key.cmp(&b.1.key)));

        let count = entries.len();
        let mut text = metadata.header(count);

        text.push_str(BODY_OPEN);
        text.push('\n');
        for (name, option) in entries {
            // Writing to a String cannot fail.
            let _ = writeln!(
                text,
                "  {}",
                statement(name, option, self.force_wrapper.as_deref())
            );
        }
        text.push_str("}\n");

        RenderedOverrides { text, count }
    }

    /// Render and return only the text.
    pub fn serialize(
        &self,
        overrides: &ConfigSet,
        excluded: &BTreeSet<String>,
        metadata: &OverrideMetadata,
    ) -> String {
        self.render(overrides, excluded, metadata).text
    }
}

/// Render with the default prefix and no force wrapper.
pub fn serialize(
    overrides: &ConfigSet,
    excluded: &BTreeSet<String>,
    metadata: &OverrideMetadata,
) -> String {
    OverrideSerializer::default().serialize(overrides, excluded, metadata)
}
