//! wpfind - Find WordPress installations under a directory tree

pub mod log;
pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use log::{ElapsedLog, NullLog, ScanLog};
pub use output::{OutputFormat, render};
pub use scan::{
    FindRecord, IGNORE_FRAGMENTS, MARKER_DIR, MARKER_FILE, ResultSet, ScanConfig, ScanWalker,
    extract_version,
};
