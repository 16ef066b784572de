//! Workspace environment validation.
//!
//! A `Workspace` wraps the directory the host editor has open and proves it
//! is usable before any tracking work happens: the path must exist, be a
//! directory, and be writable. Each failure maps to a distinct environment
//! error so the host adapter can report precisely what is wrong.
//!
//! The workspace also owns the hidden `.firstview/` metadata folder, the
//! only thing this extension writes inside the project tree.

use crate::error::{FirstviewError, Result};
use fs_err as fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File surfaced to first-time viewers. Only the conventional spelling at
/// the workspace root is considered.
pub const README_FILE: &str = "README.md";

/// Name of the hidden per-project metadata folder.
pub const METADATA_DIR: &str = ".firstview";

/// Settings file inside the metadata folder.
pub const SETTINGS_FILE: &str = "settings.json";

/// A validated project workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Validates `root` as a usable project workspace.
    ///
    /// The path must exist, be a directory, and be writable. Writability is
    /// probed directly rather than inferred from permission bits, which lie
    /// on some filesystems.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        let meta = match fs::metadata(&root) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FirstviewError::WorkspaceNotFound(root));
            }
            Err(source) => {
                return Err(FirstviewError::Io {
                    context: format!("inspecting workspace {}", root.display()),
                    source,
                });
            }
        };

        if !meta.is_dir() {
            return Err(FirstviewError::WorkspaceNotADirectory(root));
        }

        if tempfile::tempfile_in(&root).is_err() {
            return Err(FirstviewError::WorkspaceNotWritable(root));
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Conventional README location for this workspace.
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(README_FILE)
    }

    pub fn has_readme(&self) -> bool {
        self.readme_path().is_file()
    }

    /// Path of the hidden metadata folder. May not exist yet; see
    /// [`Workspace::ensure_metadata_dir`].
    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    /// Creates the hidden metadata folder if it is missing.
    pub fn ensure_metadata_dir(&self) -> Result<PathBuf> {
        let dir = self.metadata_dir();
        fs::create_dir_all(&dir).map_err(|source| FirstviewError::Io {
            context: format!("creating metadata folder {}", dir.display()),
            source,
        })?;
        Ok(dir)
    }

    /// Path of the workspace-scoped settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.metadata_dir().join(SETTINGS_FILE)
    }
}
