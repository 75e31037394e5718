//! Host collaborator error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Navigation rejected: {0}")]
    Navigation(String),

    #[error("Directory listing failed: {0}")]
    Io(#[from] std::io::Error),
}
