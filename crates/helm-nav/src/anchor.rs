//! Path anchor parsing
//!
//! A target path splits into a leading anchor (root, home, or nothing) that
//! is resolved once, and the remaining separator-delimited segments that are
//! walked one by one.

use std::path::{Path, PathBuf};

use crate::error::DescendError;
use crate::Result;

/// The leading prefix of a user-typed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Leading `/`
    Absolute,
    /// Leading `~` or `~user`
    HomeRelative(Option<String>),
    /// No prefix; relative to the directory the command runs in
    Relative,
}

/// A raw path split into its anchor and remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    anchor: Anchor,
    remainder: String,
}

impl ParsedPath {
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix('/') {
            return Self {
                anchor: Anchor::Absolute,
                remainder: rest.to_string(),
            };
        }

        if let Some(rest) = raw.strip_prefix('~') {
            let (user, remainder) = match rest.find('/') {
                Some(idx) => (&rest[..idx], &rest[idx + 1..]),
                None => (rest, ""),
            };
            let user = if user.is_empty() {
                None
            } else {
                Some(user.to_string())
            };
            return Self {
                anchor: Anchor::HomeRelative(user),
                remainder: remainder.to_string(),
            };
        }

        Self {
            anchor: Anchor::Relative,
            remainder: raw.to_string(),
        }
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Segments of the remainder: maximal runs of non-separator characters.
    /// Doubled and trailing separators produce no segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.remainder.split('/').filter(|s| !s.is_empty())
    }

    /// Resolve the anchor to an absolute directory. Relative paths resolve
    /// against `base`.
    pub fn resolve_anchor(&self, base: &Path) -> Result<PathBuf> {
        match &self.anchor {
            Anchor::Absolute => Ok(PathBuf::from("/")),
            Anchor::HomeRelative(None) => {
                dirs::home_dir().ok_or_else(|| DescendError::HomeUnavailable("~".to_string()))
            }
            Anchor::HomeRelative(Some(user)) => {
                // Conventionally a sibling of the invoking user's home.
                let home =
                    dirs::home_dir().ok_or_else(|| DescendError::HomeUnavailable(user.clone()))?;
                let parent = home
                    .parent()
                    .ok_or_else(|| DescendError::HomeUnavailable(user.clone()))?;
                Ok(parent.join(user))
            }
            Anchor::Relative => Ok(base.to_path_buf()),
        }
    }

    /// The full target path: resolved anchor joined with every segment.
    pub fn target(&self, base: &Path) -> Result<PathBuf> {
        let mut target = self.resolve_anchor(base)?;
        for segment in self.segments() {
            target.push(segment);
        }
        Ok(target)
    }
}
