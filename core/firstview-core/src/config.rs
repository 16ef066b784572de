//! Workspace-scoped settings persistence.
//!
//! Firstview mirrors the seen fact into `.firstview/settings.json` inside
//! the workspace so it sits next to other user-visible project settings.
//! The file may carry keys owned by other tools; loads and saves preserve
//! them untouched. This module only ever changes `firstview.conf.seen`.
//!
//! The marker store remains the source of truth. The flag here is
//! observational and is rewritten from marker state by the engine; editing
//! it by hand never creates or removes markers.
//!
//! Saves are atomic (temp file + rename) so a crash mid-write cannot leave
//! a torn settings file.

use crate::error::{FirstviewError, Result};
use crate::workspace::Workspace;
use fs_err as fs;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{ErrorKind, Write};
use tempfile::NamedTempFile;

/// Configuration key for the mirrored seen flag.
pub const SEEN_KEY: &str = "firstview.conf.seen";

/// Workspace settings, with unknown keys preserved across saves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    #[serde(rename = "firstview.conf.seen", default)]
    pub seen: bool,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Loads workspace settings, returning defaults if the file doesn't exist.
///
/// A malformed file is an error rather than a silent default: saving over
/// it would destroy settings owned by other tools.
pub fn load_settings(workspace: &Workspace) -> Result<WorkspaceSettings> {
    let path = workspace.settings_path();
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(WorkspaceSettings::default()),
        Err(source) => {
            return Err(FirstviewError::Io {
                context: format!("reading settings {}", path.display()),
                source,
            });
        }
    };
    serde_json::from_str(&content).map_err(|source| FirstviewError::Json {
        context: format!("parsing settings {}", path.display()),
        source,
    })
}

/// Atomically writes workspace settings, creating `.firstview/` if needed.
pub fn save_settings(workspace: &Workspace, settings: &WorkspaceSettings) -> Result<()> {
    let dir = workspace.ensure_metadata_dir()?;
    let path = workspace.settings_path();

    let content =
        serde_json::to_string_pretty(settings).map_err(|source| FirstviewError::Json {
            context: format!("serializing settings {}", path.display()),
            source,
        })?;

    let mut tmp =
        NamedTempFile::new_in(&dir).map_err(|source| FirstviewError::ConfigWriteFailed {
            path: path.clone(),
            source,
        })?;
    tmp.write_all(content.as_bytes())
        .map_err(|source| FirstviewError::ConfigWriteFailed {
            path: path.clone(),
            source,
        })?;
    tmp.persist(&path)
        .map_err(|e| FirstviewError::ConfigWriteFailed {
            path: path.clone(),
            source: e.error,
        })?;

    Ok(())
}

/// Sets the mirrored seen flag and persists, preserving foreign keys.
pub fn write_seen_flag(workspace: &Workspace, seen: bool) -> Result<()> {
    let mut settings = load_settings(workspace)?;
    settings.seen = seen;
    save_settings(workspace, &settings)
}
