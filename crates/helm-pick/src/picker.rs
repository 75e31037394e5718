//! Fuzzy picking

use std::fs;

use helm_host::Navigator;
use helm_search::CommandRunner;

use crate::Result;

/// What the candidate listing contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickScope {
    FilesAndDirs,
    DirsOnly,
}

/// List candidates below the current directory with `search_tool`, let
/// `picker_tool` choose one, and navigate to it: directories are entered,
/// files selected.
///
/// Returns the absolute path of the choice, or `None` when the picker was
/// cancelled or produced nothing.
pub fn pick(
    navigator: &dyn Navigator,
    runner: &dyn CommandRunner,
    search_tool: &str,
    picker_tool: &str,
    excludes: &[String],
    scope: PickScope,
) -> Result<Option<String>> {
    let mut args: Vec<&str> = Vec::new();
    if scope == PickScope::DirsOnly {
        args.extend(["--type", "d"]);
    }
    args.extend(["--hidden", "--follow"]);
    for exclude in excludes {
        args.extend(["--exclude", exclude]);
    }

    let candidates = runner.run(search_tool, &args)?;
    if !candidates.success {
        tracing::warn!(tool = search_tool, "Candidate listing failed");
        return Ok(None);
    }

    // +m: single selection only.
    let choice = runner.run_with_input(picker_tool, &["+m"], &candidates.stdout)?;
    if !choice.success {
        // Cancelled by the user.
        return Ok(None);
    }

    let picked = String::from_utf8_lossy(&choice.stdout);
    let picked = picked.trim_end_matches('\n');
    if picked.is_empty() {
        return Ok(None);
    }

    let absolute = navigator.current_directory_path().join(picked);
    let absolute = absolute.to_string_lossy().into_owned();

    let is_dir = fs::metadata(&absolute).map(|m| m.is_dir()).unwrap_or(false);
    if is_dir {
        navigator.change_directory(&absolute)?;
    } else {
        navigator.select_absolute_path(&absolute)?;
    }

    tracing::info!(path = %absolute, "Picked entry");
    Ok(Some(absolute))
}
