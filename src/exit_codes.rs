//! Exit code constants for the kconfig-override CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, unreadable input)
//! - 2: Source failure (export tool could not run or failed)
//! - 3: Output failure (artifact or cache could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or missing input files.
pub const USER_ERROR: i32 = 1;

/// Source failure: an external export tool failed to start or exited non-zero.
pub const SOURCE_FAILURE: i32 = 2;

/// Output failure: the generated file or a cache file could not be written.
pub const OUTPUT_FAILURE: i32 = 3;
