//! Marker-directory discovery
//!
//! This module implements the scan itself: a depth-first walk from a root
//! directory that prunes unpromising branches early and records one
//! `FindRecord` per discovered installation.
//!
//! - `config` - scan options
//! - `ignore` - built-in branch-pruning fragments
//! - `record` - find records and the ordered result set
//! - `version` - marker file text scanning
//! - `walker` - the recursive walk

mod config;
mod ignore;
mod record;
mod version;
mod walker;

// Re-export public types
pub use config::ScanConfig;
pub use ignore::IGNORE_FRAGMENTS;
pub use record::{FindRecord, ResultSet};
pub use version::extract_version;
pub use walker::{MARKER_DIR, MARKER_FILE, ScanWalker};
