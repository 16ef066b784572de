//! Notification channel between the lifecycle controller and the host UI.
//!
//! One producer (the engine) and one consumer (the host adapter) need no
//! publish/subscribe plumbing, so the channel is a plain trait the adapter
//! implements and the engine calls directly.

use crate::error::{FirstviewError, Result};
use std::path::Path;
use std::process::Command;

/// Receives user-facing intents from the engine.
pub trait Notifier {
    /// Asks the host to open the README in an editor view.
    fn open_readme(&self, path: &Path) -> Result<()>;

    /// Surfaces a short informational message to the user.
    fn notify(&self, title: &str, body: &str);
}

/// Opens files with the platform opener, or a caller-supplied command.
///
/// Editor glue that has its own file-opening CLI passes it via
/// [`CommandNotifier::with_command`]; otherwise `open` (macOS) or
/// `xdg-open` (Linux) hands the README to the default handler.
#[derive(Debug, Default)]
pub struct CommandNotifier {
    open_command: Option<String>,
}

impl CommandNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `command` to open the README instead of the platform opener.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            open_command: Some(command.into()),
        }
    }

    fn opener(&self) -> Result<&str> {
        if let Some(command) = &self.open_command {
            return Ok(command);
        }
        if cfg!(target_os = "macos") {
            Ok("open")
        } else if cfg!(target_os = "linux") {
            Ok("xdg-open")
        } else {
            Err(FirstviewError::UnsupportedPlatform(
                std::env::consts::OS.to_string(),
            ))
        }
    }
}

impl Notifier for CommandNotifier {
    fn open_readme(&self, path: &Path) -> Result<()> {
        let opener = self.opener()?;
        let status = Command::new(opener).arg(path).status().map_err(|e| {
            FirstviewError::CommandFailed {
                command: opener.to_string(),
                details: e.to_string(),
            }
        })?;

        if !status.success() {
            return Err(FirstviewError::CommandFailed {
                command: opener.to_string(),
                details: format!("exited with {status}"),
            });
        }

        tracing::debug!(path = %path.display(), opener, "Asked host to open README");
        Ok(())
    }

    fn notify(&self, title: &str, body: &str) {
        tracing::info!(title, "{}", body);
        eprintln!("{title}: {body}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_command_wins_over_platform_opener() {
        let notifier = CommandNotifier::with_command("my-editor");
        assert_eq!(notifier.opener().unwrap(), "my-editor");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_defaults_to_xdg_open() {
        let notifier = CommandNotifier::new();
        assert_eq!(notifier.opener().unwrap(), "xdg-open");
    }

    #[test]
    fn test_missing_command_is_a_typed_failure() {
        let notifier = CommandNotifier::with_command("/definitely/not/a/real/binary-xyz");
        let err = notifier.open_readme(Path::new("/tmp/README.md")).unwrap_err();
        assert!(matches!(err, FirstviewError::CommandFailed { .. }));
    }
}
