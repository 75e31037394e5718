//! Helm jump
//!
//! `z`-style directory jumping: match the query against the frecency
//! datafile maintained by the shell hook and enter the best-ranked
//! directory. The datafile is read-only here; writing it stays with the
//! shell integration.

mod error;
mod query;
mod store;

pub use error::JumpError;
pub use query::{best_match, jump_to};
pub use store::{JumpEntry, JumpStore};

pub type Result<T> = std::result::Result<T, JumpError>;
