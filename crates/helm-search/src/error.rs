//! Search error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Couldn't find {0} on the PATH")]
    ToolUnavailable(String),

    #[error("Failed to run {0}: {1}")]
    Spawn(String, std::io::Error),
}
