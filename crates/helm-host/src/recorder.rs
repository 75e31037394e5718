//! Recording navigator
//!
//! In-memory [`Navigator`] used by the crate tests across the workspace,
//! the same way an in-memory database backs storage tests. It records every
//! call in order and can be scripted to reject a specific target.

use parking_lot::Mutex;
use std::path::{Path, PathBuf};

use crate::error::HostError;
use crate::navigator::{Navigator, Severity};
use crate::Result;

/// One recorded navigator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    ChangeDirectory(String),
    SelectEntry(String),
    LoadContents(bool),
    SelectPath(String),
    Notify(String, Severity),
}

pub struct RecordingNavigator {
    calls: Mutex<Vec<NavCall>>,
    cwd: Mutex<PathBuf>,
    hidden_visible: bool,
    selection: Vec<PathBuf>,
    reject: Mutex<Option<String>>,
}

impl RecordingNavigator {
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            cwd: Mutex::new(cwd.as_ref().to_path_buf()),
            hidden_visible: false,
            selection: Vec::new(),
            reject: Mutex::new(None),
        }
    }

    pub fn with_hidden_visible(mut self, visible: bool) -> Self {
        self.hidden_visible = visible;
        self
    }

    pub fn with_selection(mut self, selection: Vec<PathBuf>) -> Self {
        self.selection = selection;
        self
    }

    /// Reject the next change-directory or selection naming `target`.
    pub fn reject_target(&self, target: &str) {
        *self.reject.lock() = Some(target.to_string());
    }

    pub fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().clone()
    }

    /// Calls excluding notifications, in order.
    pub fn navigation_calls(&self) -> Vec<NavCall> {
        self.calls
            .lock()
            .iter()
            .filter(|c| !matches!(c, NavCall::Notify(..)))
            .cloned()
            .collect()
    }

    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                NavCall::Notify(msg, sev) => Some((msg.clone(), *sev)),
                _ => None,
            })
            .collect()
    }

    fn check_reject(&self, target: &str) -> Result<()> {
        let rejected = self.reject.lock().as_deref() == Some(target);
        if rejected {
            return Err(HostError::Navigation(format!("rejected: {}", target)));
        }
        Ok(())
    }

    fn record(&self, call: NavCall) {
        self.calls.lock().push(call);
    }
}

impl Navigator for RecordingNavigator {
    fn change_directory(&self, path: &str) -> Result<()> {
        self.check_reject(path)?;
        self.record(NavCall::ChangeDirectory(path.to_string()));

        let mut cwd = self.cwd.lock();
        if path == ".." {
            cwd.pop();
        } else if Path::new(path).is_absolute() {
            *cwd = PathBuf::from(path);
        } else {
            cwd.push(path);
        }
        Ok(())
    }

    fn select_entry_by_exact_name(&self, name: &str) -> Result<()> {
        self.check_reject(name)?;
        self.record(NavCall::SelectEntry(name.to_string()));

        // Mirror the host entering a selected directory.
        self.cwd.lock().push(name);
        Ok(())
    }

    fn load_directory_contents(&self, synchronous: bool) -> Result<()> {
        self.record(NavCall::LoadContents(synchronous));
        Ok(())
    }

    fn select_absolute_path(&self, path: &str) -> Result<()> {
        self.check_reject(path)?;
        self.record(NavCall::SelectPath(path.to_string()));
        Ok(())
    }

    fn current_directory_path(&self) -> PathBuf {
        self.cwd.lock().clone()
    }

    fn hidden_entries_visible(&self) -> bool {
        self.hidden_visible
    }

    fn selected_paths(&self) -> Vec<PathBuf> {
        self.selection.clone()
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.record(NavCall::Notify(message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let nav = RecordingNavigator::new("/tmp");
        nav.change_directory("/home").unwrap();
        nav.load_directory_contents(true).unwrap();
        nav.select_entry_by_exact_name("projects").unwrap();

        assert_eq!(
            nav.calls(),
            vec![
                NavCall::ChangeDirectory("/home".to_string()),
                NavCall::LoadContents(true),
                NavCall::SelectEntry("projects".to_string()),
            ]
        );
        assert_eq!(nav.current_directory_path(), PathBuf::from("/home/projects"));
    }

    #[test]
    fn test_rejects_scripted_target() {
        let nav = RecordingNavigator::new("/tmp");
        nav.reject_target("secret");

        assert!(nav.change_directory("ok").is_ok());
        assert!(nav.select_entry_by_exact_name("secret").is_err());
    }

    #[test]
    fn test_parent_reference_pops_cwd() {
        let nav = RecordingNavigator::new("/a/b/c");
        nav.change_directory("..").unwrap();
        assert_eq!(nav.current_directory_path(), PathBuf::from("/a/b"));
    }
}
