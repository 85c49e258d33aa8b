//! Kernel build-option reconciliation.
//!
//! Parses a candidate (vendor) and a baseline (distribution) kernel config,
//! compares them, and renders the minimal set of overrides the candidate must
//! force. The four core stages are pure functions:
//!
//! - [`kconfig::parse`]: config text to [`kconfig::ConfigSet`]
//! - [`compare::diff`]: two sets to a [`compare::DiffResult`]
//! - [`classify::classify`]: missing keys to importance tiers
//! - [`render::serialize`]: a set to override file text
//!
//! Everything that touches the filesystem or runs tools lives in [`source`],
//! [`fs`] and [`pipeline`].
//!
//! ```
//! use kconfig_override::{compare, kconfig, render};
//! use chrono::Utc;
//! use std::collections::BTreeSet;
//!
//! let candidate = kconfig::parse("CONFIG_FOO=y\nCONFIG_HZ=1000\n");
//! let baseline = kconfig::parse("CONFIG_HZ=250\nCONFIG_BAR=m\n");
//! let result = compare::diff(&candidate, &baseline);
//!
//! let meta = render::OverrideMetadata::new("Overrides", "6.17.1", Utc::now());
//! let text = render::serialize(&result.forced_options(&candidate), &BTreeSet::new(), &meta);
//! assert!(text.contains("  FOO = yes;\n"));
//! assert!(text.contains("  HZ = (freeform \"1000\");\n"));
//! assert!(!text.contains("BAR"));
//! ```

pub mod classify;
pub mod compare;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod kconfig;
pub mod kernel_version;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod source;

#[cfg(test)]
mod test_support;
