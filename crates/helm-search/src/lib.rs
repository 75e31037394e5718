//! Helm search
//!
//! Runs an external filesystem search tool (`fd` by default), turns its
//! captured output into a sorted list of absolute match paths, and keeps the
//! list in a cyclic cursor so next/previous keystrokes rotate through the
//! matches.

mod cursor;
mod error;
mod fd;
mod runner;

pub use cursor::{CursorState, MatchCursor};
pub use error::SearchError;
pub use fd::{collect_matches, ResultSeparator, SearchQuery};
pub use runner::{CommandRunner, RunOutput, SystemRunner};

pub type Result<T> = std::result::Result<T, SearchError>;
