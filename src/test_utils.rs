//! Test utilities for building throwaway directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for scan tests.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create an install skeleton: `<path>/wp-includes/version.php` carrying
    /// a `$wp_version` assignment for `version`.
    pub fn add_install(&self, path: &str, version: &str) -> PathBuf {
        let marker = format!("{}/wp-includes/version.php", path);
        self.add_file(
            &marker,
            &format!(
                "<?php\n$wp_version = '{}';\n$wp_db_version = 56657;\n",
                version
            ),
        )
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
