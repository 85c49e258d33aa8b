//! Kernel build-option model and line-format parser.
//!
//! The parser accepts the three line forms found in kernel `.config` exports
//! and in the distribution's intermediate notation:
//! - `CONFIG_FOO=value` (canonical, prefix already present)
//! - `# CONFIG_FOO is not set` (compiled-out boolean)
//! - `FOO value` / `FOO? value` (intermediate notation, prefix synthesized)
//!
//! Parsing is lenient: any line it does not recognize is skipped, and a later
//! line for the same key replaces an earlier one.

mod helpers;
mod option;
mod parser;


pub use helpers::{display_name, is_option_name};
pub use option::{ConfigOption, ConfigSet, ValueKind};
pub use parser::{ConfigParser, DEFAULT_PREFIX, parse};
