//! Revealing the selection in the OS file browser

use std::path::PathBuf;

use helm_search::CommandRunner;

use crate::error::PickError;
use crate::Result;

/// Build the AppleScript pair that reveals `paths` in Finder and brings it
/// to the front.
pub fn reveal_script(paths: &[PathBuf]) -> (String, String) {
    let files = paths
        .iter()
        .map(|p| {
            let escaped = p
                .to_string_lossy()
                .replace('\\', "\\\\")
                .replace('"', "\\\"");
            format!("\"{}\" as POSIX file", escaped)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let reveal = format!("tell application \"Finder\" to reveal {{{}}}", files);
    let activate = "tell application \"Finder\" to set frontmost to true".to_string();
    (reveal, activate)
}

/// Reveal `paths` via `osascript`. Errors when the selection is empty or the
/// script fails.
pub fn reveal(runner: &dyn CommandRunner, paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(PickError::EmptySelection);
    }

    let (reveal, activate) = reveal_script(paths);
    let output = runner.run("osascript", &["-e", &reveal, "-e", &activate])?;
    if !output.success {
        return Err(PickError::RevealFailed);
    }

    tracing::info!(count = paths.len(), "Revealed selection");
    Ok(())
}
