//! ScanWalker - recursive marker-directory discovery

use std::fs;
use std::path::Path;

use crate::log::ScanLog;

use super::config::ScanConfig;
use super::ignore::matched_fragment;
use super::record::{FindRecord, ResultSet};
use super::version::extract_version;

/// Directory name whose presence signals an installation root.
pub const MARKER_DIR: &str = "wp-includes";
/// File inside the marker directory that carries the version string.
pub const MARKER_FILE: &str = "version.php";

/// Walker that scans a subtree for marker directories.
///
/// The walk is depth-first, single-threaded, and best-effort: a branch that
/// cannot be read is logged and abandoned without affecting the rest of the
/// scan. Depth is carried as a call parameter, so sibling branches can never
/// observe each other's depth state.
pub struct ScanWalker {
    config: ScanConfig,
}

impl ScanWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan the configured root, collecting one record per discovered
    /// install in discovery order.
    pub fn scan(&self, log: &mut dyn ScanLog) -> ResultSet {
        let mut results = ResultSet::new();
        log.event(&format!("scanning {}", self.config.root.display()));
        self.walk_dir(&self.config.root, 0, &mut results, log);
        results
    }

    fn walk_dir(&self, path: &Path, depth: usize, results: &mut ResultSet, log: &mut dyn ScanLog) {
        // Skip symlinks: the real target is reachable through its canonical
        // location, and descending here could loop.
        if path.is_symlink() {
            log.event(&format!("skipping symlink {}", path.display()));
            return;
        }

        if !self.config.scan_all {
            if let Some(fragment) = matched_fragment(&self.relative_slashed(path)) {
                log.event(&format!(
                    "skipping {} (matches {})",
                    path.display(),
                    fragment
                ));
                return;
            }
        }

        if is_marker_dir(path) {
            let version_path = path.join(MARKER_FILE);
            let version = match fs::read_to_string(&version_path) {
                Ok(contents) => extract_version(&contents),
                Err(e) => {
                    log.event(&format!("cannot read {}: {}", version_path.display(), e));
                    return;
                }
            };
            log.event(&format!(
                "found version '{}' at {}",
                version,
                version_path.display()
            ));
            results.insert(FindRecord {
                version_path,
                version,
                // The marker directory sits one level below the install root.
                depth: depth as i64 - 1,
            });
            // The marker directory is a leaf for this walk; whatever it
            // contains belongs to the install that was just recorded.
            return;
        }

        if let Some(max) = self.config.max_depth {
            if depth > max {
                log.event(&format!(
                    "skipping {} (depth {} exceeds limit {})",
                    path.display(),
                    depth,
                    max
                ));
                return;
            }
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                log.event(&format!("cannot list {}: {}", path.display(), e));
                return;
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let entry_path = entry.path();
            if entry_path.is_dir() {
                log.event(&format!(
                    "descending into {} (depth {})",
                    entry_path.display(),
                    depth + 1
                ));
                self.walk_dir(&entry_path, depth + 1, results, log);
            }
        }
    }

    /// Path relative to the scan root, rendered with `/` separators and
    /// exactly one leading and trailing separator, for fragment matching.
    fn relative_slashed(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.config.root).unwrap_or(path);
        let mut slashed = String::from("/");
        for component in relative.components() {
            slashed.push_str(&component.as_os_str().to_string_lossy());
            slashed.push('/');
        }
        slashed
    }
}

fn is_marker_dir(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == MARKER_DIR) && path.join(MARKER_FILE).is_file()
}
