//! Seen-marker persistence for first-view README tracking.
//!
//! A marker is a file whose name is the MD5 digest of the README path it
//! covers, stored under `<storage-root>/markers/`. Existence is the only
//! fact of interest: a present marker means that README has been surfaced
//! to the user before. Marker content is informational text for anyone
//! poking around the support directory and is never read back.
//!
//! # Support Directory
//!
//! The support directory is resolved lazily on first use and validated once
//! per store instance: created if absent, rejected with a fatal
//! configuration error if it exists as a non-directory or is not writable.
//! An inaccessible support directory always propagates as an error; it is
//! never collapsed into a "not seen" answer.
//!
//! # Lifecycle
//!
//! Markers are created once per distinct README path (a moved README hashes
//! to a new marker), survive until an explicit reset, and are never updated
//! in place. Filesystem failures propagate to the caller; there are no
//! retries.

use crate::error::{FirstviewError, Result};
use crate::storage::StorageConfig;
use fs_err as fs;
use once_cell::sync::OnceCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Fixed sentence written at the top of every marker file.
const MARKER_HEADER: &str = "Created by the Firstview extension.";

/// Tracks which README paths have already been surfaced to the user.
pub struct MarkerStore {
    storage: StorageConfig,
    support_dir: OnceCell<PathBuf>,
}

impl MarkerStore {
    pub fn new(storage: StorageConfig) -> Self {
        Self {
            storage,
            support_dir: OnceCell::new(),
        }
    }

    /// Digest of a README path, rendered as a fixed-length lowercase hex
    /// string safe for use as a file name.
    ///
    /// Stable across process restarts and platforms for the same input
    /// string. No normalization is applied here; callers pass the canonical
    /// path they want tracked.
    pub fn identifier_for(path: &str) -> String {
        format!("{:x}", md5::compute(path))
    }

    /// Full path of the marker file covering `path`.
    pub fn marker_path(&self, path: &str) -> Result<PathBuf> {
        Ok(self.support_dir()?.join(Self::identifier_for(path)))
    }

    /// Whether the README at `path` has already been surfaced.
    ///
    /// An unreadable support directory is a configuration failure, not a
    /// "not seen" result.
    pub fn has_been_seen(&self, path: &str) -> Result<bool> {
        let marker = self.marker_path(path)?;
        marker
            .try_exists()
            .map_err(|source| FirstviewError::StorageUnavailable {
                path: marker,
                source,
            })
    }

    /// Records that the README at `path` has been surfaced.
    ///
    /// Calling this when the marker already exists is a no-op, so repeated
    /// calls never change observable behavior.
    pub fn mark_seen(&self, path: &str) -> Result<()> {
        if self.has_been_seen(path)? {
            return Ok(());
        }
        let marker = self.marker_path(path)?;
        let content = format!(
            "{MARKER_HEADER}\npath: {path}\ncreated: {}\n",
            chrono::Utc::now().to_rfc3339()
        );
        fs::write(&marker, content).map_err(|source| FirstviewError::Io {
            context: format!("writing seen marker {}", marker.display()),
            source,
        })?;
        tracing::debug!(marker = %marker.display(), "Seen marker created");
        Ok(())
    }

    /// Removes the marker covering `path`. An absent marker is not an error.
    pub fn clear_seen(&self, path: &str) -> Result<()> {
        let marker = self.marker_path(path)?;
        match fs::remove_file(&marker) {
            Ok(()) => {
                tracing::debug!(marker = %marker.display(), "Seen marker removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FirstviewError::Io {
                context: format!("removing seen marker {}", marker.display()),
                source,
            }),
        }
    }

    /// The validated support directory, resolved once per store instance.
    fn support_dir(&self) -> Result<&Path> {
        self.support_dir
            .get_or_try_init(|| self.resolve_support_dir())
            .map(PathBuf::as_path)
    }

    fn resolve_support_dir(&self) -> Result<PathBuf> {
        let dir = self.storage.markers_dir();
        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(FirstviewError::StorageNotADirectory(dir)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::create_dir_all(&dir).map_err(|source| {
                    FirstviewError::StorageUnavailable {
                        path: dir.clone(),
                        source,
                    }
                })?;
            }
            Err(source) => {
                return Err(FirstviewError::StorageUnavailable { path: dir, source })
            }
        }

        // Probe writability up front; a read-only support directory is fatal
        // for the whole store, not something to discover mid-operation.
        if tempfile::tempfile_in(&dir).is_err() {
            return Err(FirstviewError::StorageNotWritable(dir));
        }

        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, MarkerStore) {
        let temp = TempDir::new().unwrap();
        let storage = StorageConfig::with_root(temp.path().join("firstview"));
        (temp, MarkerStore::new(storage))
    }

    #[test]
    fn test_identifier_is_deterministic() {
        let a = MarkerStore::identifier_for("/Users/test/project/README.md");
        let b = MarkerStore::identifier_for("/Users/test/project/README.md");
        assert_eq!(a, b);
    }

    #[test]
    fn test_identifier_is_fixed_length_hex() {
        let id = MarkerStore::identifier_for("/some/README.md");
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identifiers_differ_for_distinct_paths() {
        let a = MarkerStore::identifier_for("/project/one/README.md");
        let b = MarkerStore::identifier_for("/project/two/README.md");
        assert_ne!(a, b);
    }

    #[test]
    fn test_unseen_before_mark() {
        let (_temp, store) = setup_store();
        assert!(!store.has_been_seen("/project/README.md").unwrap());
    }

    #[test]
    fn test_seen_after_mark() {
        let (_temp, store) = setup_store();
        store.mark_seen("/project/README.md").unwrap();
        assert!(store.has_been_seen("/project/README.md").unwrap());
    }

    #[test]
    fn test_mark_seen_is_idempotent() {
        let (_temp, store) = setup_store();
        store.mark_seen("/project/README.md").unwrap();
        store.mark_seen("/project/README.md").unwrap();
        assert!(store.has_been_seen("/project/README.md").unwrap());
    }

    #[test]
    fn test_clear_seen_removes_marker() {
        let (_temp, store) = setup_store();
        store.mark_seen("/project/README.md").unwrap();
        store.clear_seen("/project/README.md").unwrap();
        assert!(!store.has_been_seen("/project/README.md").unwrap());
    }

    #[test]
    fn test_clear_seen_when_unseen_is_not_an_error() {
        let (_temp, store) = setup_store();
        store.clear_seen("/never/marked/README.md").unwrap();
        assert!(!store.has_been_seen("/never/marked/README.md").unwrap());
    }

    #[test]
    fn test_moved_readme_gets_a_fresh_marker() {
        let (_temp, store) = setup_store();
        store.mark_seen("/old/home/README.md").unwrap();
        assert!(!store.has_been_seen("/new/home/README.md").unwrap());
    }

    #[test]
    fn test_marker_path_uses_identifier() {
        let (_temp, store) = setup_store();
        let path = "/project/README.md";
        let marker = store.marker_path(path).unwrap();
        assert_eq!(
            marker.file_name().unwrap().to_str().unwrap(),
            MarkerStore::identifier_for(path)
        );
    }

    #[test]
    fn test_support_path_occupied_by_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("firstview");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("markers"), "not a directory").unwrap();

        let store = MarkerStore::new(StorageConfig::with_root(root));
        let err = store.has_been_seen("/project/README.md").unwrap_err();
        assert!(matches!(err, FirstviewError::StorageNotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_support_dir_is_a_storage_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("firstview");
        let markers = root.join("markers");
        std::fs::create_dir_all(&markers).unwrap();
        std::fs::set_permissions(&markers, std::fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits don't bind root; nothing to assert there.
        if std::fs::File::create(markers.join("probe")).is_ok() {
            std::fs::set_permissions(&markers, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let store = MarkerStore::new(StorageConfig::with_root(root));
        let err = store.mark_seen("/project/README.md").unwrap_err();
        assert!(matches!(err, FirstviewError::StorageNotWritable(_)));

        // Restore permissions so TempDir cleanup can remove the tree.
        std::fs::set_permissions(&markers, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
