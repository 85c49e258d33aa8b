//! Error types for the kconfig-override CLI.
//!
//! Only the orchestration layer (config loading, sources, output) produces
//! errors. Parsing, diffing, classification and rendering are total.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for kconfig-override operations.
#[derive(Error, Debug)]
pub enum KconfError {
    /// Invalid arguments, invalid configuration, or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// An external export tool could not be run or reported failure.
    #[error("Source fetch failed: {0}")]
    SourceError(String),

    /// A generated artifact or cache file could not be written.
    #[error("Output failed: {0}")]
    OutputError(String),
}

impl KconfError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            KconfError::UserError(_) => exit_codes::USER_ERROR,
            KconfError::SourceError(_) => exit_codes::SOURCE_FAILURE,
            KconfError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for kconfig-override operations.
pub type Result<T> = std::result::Result<T, KconfError>;
