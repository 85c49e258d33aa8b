//! Line-format parser producing a [`ConfigSet`].

use super::helpers::{parse_assignment_line, parse_not_set_line, parse_spaced_line};
use super::option::{ConfigOption, ConfigSet};

/// Prefix carried by every canonical kernel option key.
pub const DEFAULT_PREFIX: &str = "CONFIG_";

/// Parser for kernel config text with a configurable canonical prefix.
#[derive(Debug, Clone)]
pub struct ConfigParser {
    prefix: String,
}

impl Default for ConfigParser {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl ConfigParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse config text into an option map.
    ///
    /// Never fails. Unrecognized lines are skipped and the last occurrence of
    /// a key wins.
    pub fn parse(&self, text: &str) -> ConfigSet {
        let mut set = ConfigSet::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            // Comments carry exactly one directive: the compiled-out form.
            if line.starts_with('#') {
                if let Some(key) = parse_not_set_line(line, &self.prefix) {
                    set.insert(ConfigOption::disabled(key));
                }
                continue;
            }

            if let Some((key, value)) = parse_assignment_line(line, &self.prefix) {
                set.insert(ConfigOption::new(key, value));
            } else if !line.starts_with(self.prefix.as_str())
                && let Some((name, value)) = parse_spaced_line(line)
            {
                set.insert(ConfigOption::new(format!("{}{}", self.prefix, name), value));
            }
        }

        set
    }
}

/// Parse config text with the default `CONFIG_` prefix.
pub fn parse(text: &str) -> ConfigSet {
    ConfigParser::default().parse(text)
}
