//! Localized user-facing messages.
//!
//! Message keys follow the `firstview.msg.*` convention so host adapters can
//! substitute their own translation catalogs. `localize` resolves a key
//! against the built-in catalog and falls back to the key itself when no
//! entry exists, so an unknown key degrades to something greppable instead
//! of an empty string.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown when activation happens in a window without a project workspace.
pub const MSG_NOT_WORKSPACE_ERROR: &str = "firstview.msg.not-workspace-error";

/// Shown alongside the first-time README open.
pub const MSG_README_SHOWN: &str = "firstview.msg.readme-shown";

/// Shown after the reset command clears the seen state.
pub const MSG_SEEN_RESET: &str = "firstview.msg.seen-reset";

static CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            MSG_NOT_WORKSPACE_ERROR,
            "Firstview requires an open project workspace.",
        ),
        (
            MSG_README_SHOWN,
            "Showing this project's README for the first time.",
        ),
        (MSG_SEEN_RESET, "README seen state has been reset."),
    ])
});

/// Resolves a message key to its localized string, or the key itself.
pub fn localize(key: &str) -> &str {
    CATALOG.get(key).copied().unwrap_or(key)
}
