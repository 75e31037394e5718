//! Create-and-descend sequencing

use std::fs;
use std::path::Path;

use helm_host::Navigator;

use crate::anchor::{Anchor, ParsedPath};
use crate::error::DescendError;
use crate::Result;

/// Create every missing directory along `raw_path` and walk the host into
/// the deepest one.
///
/// `raw_path` may be absolute, home-relative (`~`, `~user`), or relative to
/// `base_dir`. If the target already exists nothing is created and no
/// navigation happens. Hidden segments are entered directly while the host
/// filters hidden entries, since a filtered listing cannot match them;
/// everything else goes through a synchronous reload plus an exact-name
/// selection, so the freshly created entry ends up highlighted.
pub fn descend(
    navigator: &dyn Navigator,
    base_dir: &Path,
    raw_path: &str,
    show_hidden: bool,
) -> Result<()> {
    let parsed = ParsedPath::parse(raw_path);
    let target = parsed.target(base_dir)?;

    // lexists: a dangling symlink at the target still counts.
    if fs::symlink_metadata(&target).is_ok() {
        return Err(DescendError::AlreadyExists(target));
    }

    fs::create_dir_all(&target)?;
    tracing::info!(target = %target.display(), "Created directory tree");

    // The anchor may pre-exist and contain unrelated siblings, so it is
    // entered with a plain change-directory rather than a selection.
    match parsed.anchor() {
        Anchor::Absolute => navigator.change_directory("/")?,
        Anchor::HomeRelative(_) => {
            let anchor_dir = parsed.resolve_anchor(base_dir)?;
            navigator.change_directory(&anchor_dir.to_string_lossy())?;
        }
        Anchor::Relative => {}
    }

    for segment in parsed.segments() {
        let hidden = segment.starts_with('.') && segment != "..";
        if segment == ".." || (hidden && !show_hidden) {
            navigator.change_directory(segment)?;
        } else {
            navigator.load_directory_contents(true)?;
            navigator.select_entry_by_exact_name(segment)?;
        }
    }

    Ok(())
}
