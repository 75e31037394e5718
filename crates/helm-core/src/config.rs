//! Helm configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use helm_search::ResultSeparator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem search binary
    pub search_tool: String,
    /// Fuzzy picker binary
    pub picker_tool: String,
    /// How search results are delimited on stdout
    pub result_separator: ResultSeparator,
    /// Globs excluded from picker candidate listings
    pub picker_excludes: Vec<String>,
    /// Search depth when the command gives none
    pub default_depth: usize,
    /// Jump datafile override; `$_ZL_DATA` / `~/.zlua` when unset
    pub jump_data: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_tool: "fd".to_string(),
            picker_tool: "fzf".to_string(),
            result_separator: ResultSeparator::Null,
            picker_excludes: vec![".git".to_string(), ".DS_Store".to_string()],
            default_depth: 1,
            jump_data: None,
        }
    }
}
