//! FirstviewEngine - the lifecycle controller for first-view tracking.
//!
//! The engine is the explicit extension-context object: the host adapter
//! constructs one when the extension activates, drives it through
//! `activate`/`reset`/`reconcile`, and drops it (or calls `deactivate`) on
//! teardown. Nothing here lives in module-level state.
//!
//! ## Activation Check
//!
//! The check runs exactly once per activation event:
//!
//! ```text
//! Unchecked → Checking → { Seen, NotSeenAndShown }
//! ```
//!
//! `NotSeenAndShown` returns to `Unchecked` only via an explicit reset;
//! there is no automatic re-check while the engine stays active.
//!
//! ## Source of Truth
//!
//! The marker store is authoritative. The mirrored `firstview.conf.seen`
//! flag is rewritten from marker state on every activate, reset, and
//! reconcile; external edits to the flag are overwritten, not honored.

use crate::config::{load_settings, write_seen_flag};
use crate::error::{FirstviewError, Result};
use crate::markers::MarkerStore;
use crate::messages;
use crate::notify::Notifier;
use crate::storage::StorageConfig;
use crate::workspace::Workspace;
use serde::Serialize;
use std::path::PathBuf;

/// Per-activation progress of the first-view check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    Unchecked,
    Checking,
    Seen,
    NotSeenAndShown,
}

/// What an `activate` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOutcome {
    /// README existed and had not been seen: marker created, host asked to
    /// open it.
    FirstShown,
    /// Marker already present; nothing shown.
    AlreadySeen,
    /// Workspace has no README to surface.
    NoReadme,
    /// The check already ran during this activation; nothing re-runs.
    AlreadyChecked,
}

/// Diagnostic snapshot of tracking state for one workspace.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub workspace: String,
    pub readme_found: bool,
    /// Marker state, the authoritative answer.
    pub seen: bool,
    /// Mirrored settings flag, which may have drifted.
    pub flag: bool,
    pub in_sync: bool,
    pub marker_path: String,
    pub storage_root: String,
}

/// The extension context: workspace, marker store, and notification channel.
pub struct FirstviewEngine {
    workspace_root: Option<PathBuf>,
    storage: StorageConfig,
    store: MarkerStore,
    notifier: Box<dyn Notifier>,
    state: ActivationState,
}

impl FirstviewEngine {
    /// Creates an engine with default storage (`~/.firstview/`).
    ///
    /// `workspace_root` is `None` when the host opened a window without a
    /// project; every operation then fails with the localized
    /// no-workspace error.
    pub fn new(workspace_root: Option<PathBuf>, notifier: Box<dyn Notifier>) -> Self {
        Self::with_storage(StorageConfig::default(), workspace_root, notifier)
    }

    /// Creates an engine with custom storage configuration.
    /// Used for testing with temp directories.
    pub fn with_storage(
        storage: StorageConfig,
        workspace_root: Option<PathBuf>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            workspace_root,
            store: MarkerStore::new(storage.clone()),
            storage,
            notifier,
            state: ActivationState::Unchecked,
        }
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    fn workspace(&self) -> Result<Workspace> {
        let root = self
            .workspace_root
            .as_ref()
            .ok_or(FirstviewError::NoWorkspace)?;
        Workspace::open(root.clone())
    }

    /// Runs the first-view check.
    ///
    /// The check runs exactly once per activation; later calls report
    /// [`ActivationOutcome::AlreadyChecked`] until a reset. A failed check
    /// leaves the engine re-checkable.
    pub fn activate(&mut self) -> Result<ActivationOutcome> {
        if self.state != ActivationState::Unchecked {
            tracing::debug!(state = ?self.state, "Activation check already ran");
            return Ok(ActivationOutcome::AlreadyChecked);
        }

        self.state = ActivationState::Checking;
        match self.run_check() {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.state = ActivationState::Unchecked;
                Err(err)
            }
        }
    }

    fn run_check(&mut self) -> Result<ActivationOutcome> {
        let workspace = self.workspace()?;
        workspace.ensure_metadata_dir()?;

        if !workspace.has_readme() {
            tracing::debug!(root = %workspace.root().display(), "No README to surface");
            // Nothing to show, but the check still completes so it does not
            // re-run during this activation.
            self.state = ActivationState::Seen;
            return Ok(ActivationOutcome::NoReadme);
        }

        let readme = workspace.readme_path();
        let readme_key = readme.to_string_lossy().into_owned();

        if self.store.has_been_seen(&readme_key)? {
            write_seen_flag(&workspace, true)?;
            self.state = ActivationState::Seen;
            tracing::debug!(readme = %readme.display(), "README seen before");
            return Ok(ActivationOutcome::AlreadySeen);
        }

        self.store.mark_seen(&readme_key)?;
        write_seen_flag(&workspace, true)?;
        self.notifier.open_readme(&readme)?;
        self.notifier
            .notify("Firstview", messages::localize(messages::MSG_README_SHOWN));
        self.state = ActivationState::NotSeenAndShown;
        tracing::info!(readme = %readme.display(), "Surfaced README for the first time");
        Ok(ActivationOutcome::FirstShown)
    }

    /// Clears the marker and the mirrored flag unconditionally, regardless
    /// of current state, and re-arms the activation check.
    pub fn reset(&mut self) -> Result<()> {
        let workspace = self.workspace()?;
        let readme = workspace.readme_path();

        self.store.clear_seen(&readme.to_string_lossy())?;
        write_seen_flag(&workspace, false)?;
        self.state = ActivationState::Unchecked;

        self.notifier
            .notify("Firstview", messages::localize(messages::MSG_SEEN_RESET));
        tracing::info!(readme = %readme.display(), "Seen state reset");
        Ok(())
    }

    /// Rewrites the mirrored flag from marker state.
    ///
    /// This is the callback for external settings edits: the marker is the
    /// source of truth, so a hand-flipped flag is overwritten here rather
    /// than honored. Returns the authoritative seen state.
    pub fn reconcile(&mut self) -> Result<bool> {
        let workspace = self.workspace()?;
        let readme = workspace.readme_path();

        let seen = self.store.has_been_seen(&readme.to_string_lossy())?;
        write_seen_flag(&workspace, seen)?;
        tracing::debug!(seen, "Mirrored flag reconciled from marker state");
        Ok(seen)
    }

    /// Reports tracking state for diagnostics without mutating anything.
    pub fn status(&self) -> Result<StatusReport> {
        let workspace = self.workspace()?;
        let readme = workspace.readme_path();
        let readme_key = readme.to_string_lossy().into_owned();

        let seen = self.store.has_been_seen(&readme_key)?;
        let flag = load_settings(&workspace)?.seen;

        Ok(StatusReport {
            workspace: workspace.root().display().to_string(),
            readme_found: workspace.has_readme(),
            seen,
            flag,
            in_sync: seen == flag,
            marker_path: self.store.marker_path(&readme_key)?.display().to_string(),
            storage_root: self.storage.root().display().to_string(),
        })
    }

    /// Host deactivation teardown.
    ///
    /// Durable state lives in the marker and settings file; only the
    /// in-memory check state is dropped, so the next activation event
    /// re-checks (and finds the marker if one exists).
    pub fn deactivate(&mut self) {
        self.state = ActivationState::Unchecked;
        tracing::debug!("Engine deactivated");
    }
}
