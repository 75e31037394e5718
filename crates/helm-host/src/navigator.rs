//! The navigator contract consumed by every helm command

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Result;

/// Notification severity, mapped by the host onto its message styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interface the host file manager provides to helm commands.
///
/// Calls are synchronous and run on the host's command-dispatch thread; a
/// rejected call surfaces as [`HostError::Navigation`](crate::HostError) and
/// never rolls back steps that already succeeded.
pub trait Navigator: Send + Sync {
    /// Change the current directory. `path` may be absolute or a single
    /// component relative to the current directory (including `..`).
    fn change_directory(&self, path: &str) -> Result<()>;

    /// Select the entry of the current listing whose name equals `name`
    /// exactly (anchored, case-sensitive). The host enters the entry when it
    /// is a directory.
    fn select_entry_by_exact_name(&self, name: &str) -> Result<()>;

    /// (Re)load the current directory's contents. With `synchronous` the
    /// listing is complete when this returns, so a selection issued next can
    /// see freshly created entries.
    fn load_directory_contents(&self, synchronous: bool) -> Result<()>;

    /// Select the entry identified by an absolute path, switching directories
    /// if needed.
    fn select_absolute_path(&self, path: &str) -> Result<()>;

    /// Absolute path of the current directory.
    fn current_directory_path(&self) -> PathBuf;

    /// Whether the host currently displays hidden entries.
    fn hidden_entries_visible(&self) -> bool;

    /// Absolute paths of the host's marked selection, falling back to the
    /// highlighted entry when nothing is marked.
    fn selected_paths(&self) -> Vec<PathBuf>;

    /// Show a message to the user.
    fn notify(&self, message: &str, severity: Severity);
}
