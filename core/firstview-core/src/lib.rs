//! # firstview-core
//!
//! Core library for Firstview, which shows a project's README to a user
//! exactly once (the first time they open the project) and offers a
//! manual reset of that "seen" state.
//!
//! The seen fact is a marker file named by the MD5 digest of the README
//! path, stored in a per-machine support directory outside the project
//! tree so it survives across sessions without polluting the repository.
//! A redundant flag is mirrored into workspace settings for visibility;
//! the marker is authoritative.
//!
//! ## Design Principles
//!
//! - **Synchronous**: Marker operations are single-shot local filesystem
//!   calls. No async runtime, no retries.
//! - **Not thread-safe**: The host runs extensions on one thread; clients
//!   provide their own synchronization if they need it.
//! - **Explicit context**: No module-level mutable state. The host adapter
//!   owns a [`FirstviewEngine`] and drives it through the activation
//!   lifecycle.
//! - **Fail loud on configuration**: An unusable support directory or
//!   workspace is a typed error, never a silent "not seen".
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use firstview_core::{CommandNotifier, FirstviewEngine};
//!
//! let mut engine = FirstviewEngine::new(
//!     std::env::current_dir().ok(),
//!     Box::new(CommandNotifier::new()),
//! );
//! engine.activate()?;
//! ```

// Public modules
pub mod config;
pub mod engine;
pub mod error;
pub mod markers;
pub mod messages;
pub mod notify;
pub mod storage;
pub mod workspace;

// Re-export commonly used items at crate root
pub use engine::{ActivationOutcome, ActivationState, FirstviewEngine, StatusReport};
pub use error::{FirstviewError, Result};
pub use markers::MarkerStore;
pub use notify::{CommandNotifier, Notifier};
pub use storage::StorageConfig;
pub use workspace::Workspace;
