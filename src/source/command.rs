//! External export tool runner.
//!
//! Commands are split with shell-words and executed directly, never through a
//! shell. Failures carry the exit code and stderr so the caller can surface
//! them.

use crate::error::{KconfError, Result};
use std::path::Path;
use std::process::Command;

/// Captured output of a successful tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Standard output, untrimmed.
    pub stdout: String,
    /// Standard error (trimmed).
    pub stderr: String,
}

/// Run `command` in `cwd` (or the current directory).
///
/// # Returns
///
/// * `Ok(ToolOutput)` - On exit code 0
/// * `Err(KconfError::UserError)` - The command string is empty or unparsable
/// * `Err(KconfError::SourceError)` - Spawn failure, non-zero exit, or non-UTF-8 stdout
pub fn run_tool(command: &str, cwd: Option<&Path>) -> Result<ToolOutput> {
    let command = command.trim();
    let args = shell_words::split(command).map_err(|e| {
        KconfError::UserError(format!(
            "failed to parse command: {}\nCommand: {}\nFix: check for unmatched quotes or invalid escape sequences.",
            e, command
        ))
    })?;

    let Some((program, rest)) = args.split_first() else {
        return Err(KconfError::UserError("source command is empty".to_string()));
    };

    let mut cmd = Command::new(program);
    cmd.args(rest);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| {
        KconfError::SourceError(format!(
            "failed to execute {}: {}\nCommand: {}\nFix: ensure the command is installed and in PATH.",
            program, e, command
        ))
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if !output.status.success() {
        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout);
        return Err(KconfError::SourceError(format!(
            "{} failed (exit code {}): {}",
            program,
            exit_code,
            if stderr.is_empty() { stdout.trim() } else { stderr.as_str() }
        )));
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| {
        KconfError::SourceError(format!(
            "{} produced output that is not valid UTF-8: {}\nCommand: {}",
            program, e, command
        ))
    })?;

    Ok(ToolOutput { stdout, stderr })
}
