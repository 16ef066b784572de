//! Storage configuration and path management for Firstview.
//!
//! This module provides a centralized `StorageConfig` struct that manages
//! all file paths for Firstview's per-machine data. Markers live here, in
//! the extension's own namespace, never inside the user's project tree.
//!
//! ## Design Principles
//!
//! - **Single source of truth**: every path decision lives here
//! - **Testable**: `StorageConfig::with_root()` injects a temp root
//! - **Forward-compatible**: room for env var overrides or XDG layouts later

use std::path::{Path, PathBuf};

/// Central configuration for all Firstview storage paths.
///
/// Production code uses `StorageConfig::default()` which points to
/// `~/.firstview/`. Tests use `StorageConfig::with_root(temp_dir)` for
/// isolation.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for all Firstview data (default: ~/.firstview)
    root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let home = dirs::home_dir().expect("Could not find home directory");
        Self {
            root: home.join(".firstview"),
        }
    }
}

impl StorageConfig {
    /// Creates a StorageConfig with a custom root directory.
    /// Used for testing with temp directories.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the root directory for Firstview data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to markers/ directory (seen markers, one file per README path).
    pub fn markers_dir(&self) -> PathBuf {
        self.root.join("markers")
    }

    /// Path to logs/ directory (hook binary log files).
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    /// Ensures the root directory and standard subdirectories exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.markers_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_root_is_firstview() {
        let config = StorageConfig::default();
        assert!(config.root().ends_with(".firstview"));
    }

    #[test]
    fn test_with_root_sets_custom_path() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/test-firstview"));
        assert_eq!(config.root(), Path::new("/tmp/test-firstview"));
    }

    #[test]
    fn test_markers_dir_path() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/firstview"));
        assert_eq!(
            config.markers_dir(),
            PathBuf::from("/tmp/firstview/markers")
        );
    }

    #[test]
    fn test_logs_dir_path() {
        let config = StorageConfig::with_root(PathBuf::from("/tmp/firstview"));
        assert_eq!(config.logs_dir(), PathBuf::from("/tmp/firstview/logs"));
    }

    #[test]
    fn test_ensure_dirs_creates_structure() {
        let temp = TempDir::new().unwrap();
        let config = StorageConfig::with_root(temp.path().join("firstview"));

        config.ensure_dirs().unwrap();

        assert!(config.root().exists());
        assert!(config.markers_dir().exists());
        assert!(config.logs_dir().exists());
    }
}
