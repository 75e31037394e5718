//! Pick error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickError {
    #[error("Search error: {0}")]
    Search(#[from] helm_search::SearchError),

    #[error("Host error: {0}")]
    Host(#[from] helm_host::HostError),

    #[error("Nothing is selected")]
    EmptySelection,

    #[error("Reveal command failed")]
    RevealFailed,
}
