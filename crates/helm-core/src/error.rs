//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    Descend(#[from] helm_nav::DescendError),

    #[error("{0}")]
    Search(#[from] helm_search::SearchError),

    #[error("{0}")]
    Jump(#[from] helm_jump::JumpError),

    #[error("{0}")]
    Pick(#[from] helm_pick::PickError),

    #[error("Host error: {0}")]
    Host(#[from] helm_host::HostError),

    #[error("{0}")]
    Usage(String),
}
