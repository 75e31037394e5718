//! Frecency datafile access
//!
//! One record per line, `path|rank|epoch`. Malformed lines are skipped so a
//! half-written file never breaks jumping.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::JumpError;
use crate::Result;

const DATA_ENV: &str = "_ZL_DATA";
const DEFAULT_FILE: &str = ".zlua";

#[derive(Debug, Clone, PartialEq)]
pub struct JumpEntry {
    pub path: String,
    pub rank: f64,
    pub last_visit: i64,
}

pub struct JumpStore {
    path: PathBuf,
}

impl JumpStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the datafile: `$_ZL_DATA`, falling back to `~/.zlua`.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var(DATA_ENV) {
            return Ok(Self::new(path));
        }

        dirs::home_dir()
            .map(|home| Self::new(home.join(DEFAULT_FILE)))
            .ok_or_else(|| JumpError::DataUnavailable(PathBuf::from(DEFAULT_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> Result<Vec<JumpEntry>> {
        if !self.path.exists() {
            return Err(JumpError::DataUnavailable(self.path.clone()));
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.lines().filter_map(parse_line).collect())
    }
}

/// Fields are split from the right so a `|` inside the path survives.
fn parse_line(line: &str) -> Option<JumpEntry> {
    let mut fields = line.rsplitn(3, '|');
    let last_visit = fields.next()?.trim().parse::<i64>().ok()?;
    let rank = fields.next()?.trim().parse::<f64>().ok()?;
    let path = fields.next()?;

    if path.is_empty() {
        return None;
    }

    Some(JumpEntry {
        path: path.to_string(),
        rank,
        last_visit,
    })
}
