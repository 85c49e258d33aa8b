//! Source specifications as written in the config file.

use super::cache;
use super::command::run_tool;
use crate::error::{KconfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which side of the comparison a source feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    Candidate,
    Baseline,
}

impl std::fmt::Display for SourceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRole::Candidate => write!(f, "candidate"),
            SourceRole::Baseline => write!(f, "baseline"),
        }
    }
}

/// How to interpret an export command's stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Stdout is the config text (annotation exporters).
    #[default]
    Stdout,
    /// Stdout is the path of a file holding the config text (build tools
    /// that print output paths).
    Path,
}

/// Where one config text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSpec {
    /// Read the text from this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Run this command (shell-words parsed; no shell).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Working directory for `command`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Meaning of the command's stdout.
    pub output: OutputMode,

    /// Reuse this file instead of running `command` when it exists; written
    /// after a successful run otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<PathBuf>,
}

impl SourceSpec {
    /// A plain file source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    /// A command source whose stdout is the config text.
    pub fn command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..Self::default()
        }
    }

    pub fn with_cache(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache = Some(path.into());
        self
    }

    /// Check that exactly one of `file` / `command` is set and that `cache`
    /// only accompanies a command.
    pub fn validate(&self, role: &str) -> Result<()> {
        match (&self.file, &self.command) {
            (Some(_), Some(_)) => Err(KconfError::UserError(format!(
                "config validation failed: {} source sets both 'file' and 'command'",
                role
            ))),
            (None, None) => Err(KconfError::UserError(format!(
                "config validation failed: {} source needs 'file' or 'command'",
                role
            ))),
            (Some(_), None) if self.cache.is_some() => Err(KconfError::UserError(format!(
                "config validation failed: {} source uses 'cache' with 'file'; cache only applies to commands",
                role
            ))),
            _ => Ok(()),
        }
    }

    /// Resolve this spec to config text.
    pub fn fetch(&self, role: SourceRole) -> Result<String> {
        self.validate(&role.to_string())?;

        if let Some(path) = &self.file {
            debug!(%role, path = %path.display(), "reading config file");
            return read_text(path, role);
        }

        if let Some(cache_path) = &self.cache
            && cache_path.is_file()
        {
            debug!(%role, cache = %cache_path.display(), "using cached config");
            return read_text(cache_path, role);
        }

        let command = self.command.as_deref().unwrap_or_default();
        debug!(%role, command, "running export command");
        let output = run_tool(command, self.cwd.as_deref())?;

        let text = match self.output {
            OutputMode::Stdout => output.stdout,
            OutputMode::Path => {
                let path = PathBuf::from(output.stdout.trim());
                debug!(%role, path = %path.display(), "reading command output path");
                read_text(&path, role).map_err(|e| {
                    KconfError::SourceError(format!("{} (path printed by '{}')", e, command))
                })?
            }
        };

        if let Some(cache_path) = &self.cache {
            cache::store(cache_path, role, &text)?;
        }

        Ok(text)
    }
}

fn read_text(path: &Path, role: SourceRole) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        KconfError::UserError(format!(
            "failed to read {} config '{}': {}",
            role,
            path.display(),
            e
        ))
    })
}
