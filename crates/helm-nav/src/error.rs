//! Navigation error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescendError {
    #[error("File or directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Could not create directory: {0}")]
    Creation(#[from] std::io::Error),

    #[error("Home directory for {0} could not be resolved")]
    HomeUnavailable(String),

    #[error("Host error: {0}")]
    Host(#[from] helm_host::HostError),
}
