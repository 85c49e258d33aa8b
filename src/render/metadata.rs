//! Header metadata for generated override files.

use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Timestamp format used in generated headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Metadata written as comment lines above the override body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideMetadata {
    /// First header line.
    pub title: String,
    /// Opaque version label, e.g. a kernel release.
    pub version_label: String,
    pub generated_at: DateTime<Utc>,
    /// Extra `Name: value` lines, rendered in order after the version.
    pub fields: Vec<(String, String)>,
    /// Free comment lines rendered before the option count.
    pub notes: Vec<String>,
}

impl OverrideMetadata {
    pub fn new(
        title: impl Into<String>,
        version_label: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            version_label: version_label.into(),
            generated_at,
            fields: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Comment header for a file holding `count` statements, ending in a blank line.
    pub fn header(&self, count: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}", self.title);
        let _ = writeln!(out, "# Kernel Version: {}", self.version_label);
        for (name, value) in &self.fields {
            let _ = writeln!(out, "# {}: {}", name, value);
        }
        let _ = writeln!(
            out,
            "# Generated: {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        );
        out.push_str("#\n");
        for note in &self.notes {
            let _ = writeln!(out, "# {}", note);
        }
        let _ = writeln!(out, "# Total options: {}", count);
        out.push('\n');
        out
    }
}
