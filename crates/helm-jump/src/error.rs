//! Jump error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumpError {
    #[error("Jump datafile not found: {}", .0.display())]
    DataUnavailable(PathBuf),

    #[error("Could not read jump datafile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid jump query: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Jump needs at least one query term")]
    EmptyQuery,

    #[error("Directory not found")]
    NoMatch,

    #[error("Host error: {0}")]
    Host(#[from] helm_host::HostError),
}
