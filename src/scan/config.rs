//! Configuration types for the scan walker

use std::path::PathBuf;

/// Configuration for scan behavior.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root of the subtree to scan. Must be an absolute, resolved path;
    /// the CLI canonicalizes before constructing the config.
    pub root: PathBuf,
    /// Also scan paths matching the built-in ignore fragments.
    pub scan_all: bool,
    /// Deepest install depth to report (inclusive). `None` = unlimited.
    pub max_depth: Option<usize>,
}

impl ScanConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            scan_all: false,
            max_depth: None,
        }
    }
}
