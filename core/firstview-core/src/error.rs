//! Error types for firstview-core operations.

use std::path::PathBuf;

/// All errors that can occur in firstview-core operations.
///
/// Environment errors are fatal to activation and carry user-facing
/// messages; storage configuration errors disable marker functionality for
/// the whole extension; individual I/O failures surface to the immediate
/// caller and abort that single operation.
#[derive(Debug, thiserror::Error)]
pub enum FirstviewError {
    // ─────────────────────────────────────────────────────────────────────
    // Environment Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("{}", crate::messages::localize(crate::messages::MSG_NOT_WORKSPACE_ERROR))]
    NoWorkspace,

    #[error("Workspace path not found: {0}")]
    WorkspaceNotFound(PathBuf),

    #[error("Workspace path is not a directory: {0}")]
    WorkspaceNotADirectory(PathBuf),

    #[error("Workspace directory is not writable: {0}")]
    WorkspaceNotWritable(PathBuf),

    // ─────────────────────────────────────────────────────────────────────
    // Storage Configuration Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Support path exists but is not a directory: {0}")]
    StorageNotADirectory(PathBuf),

    #[error("Support directory is not writable: {0}")]
    StorageNotWritable(PathBuf),

    #[error("Support directory is not accessible: {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────────────
    // I/O Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings write failed: {path}: {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Host Launch Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Command execution failed: {command}: {details}")]
    CommandFailed { command: String, details: String },

    #[error("Platform not supported for this operation: {0}")]
    UnsupportedPlatform(String),
}

/// Convenience type alias for Results using FirstviewError.
pub type Result<T> = std::result::Result<T, FirstviewError>;

// Conversion for string error compatibility
impl From<FirstviewError> for String {
    fn from(err: FirstviewError) -> String {
        err.to_string()
    }
}
