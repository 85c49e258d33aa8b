//! Filesystem utilities for kconfig-override.
//!
//! Generated override files are committed to version control and regenerated
//! in place, and source caches are reused across runs, so both are written
//! atomically.

pub mod atomic;

pub use atomic::atomic_write_file;
