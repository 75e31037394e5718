//! Helm Core
//!
//! Central coordination layer: parses console commands and dispatches them
//! through a [`Session`] that owns the shared search cursor. The host file
//! manager stays a collaborator behind the [`Navigator`] trait; external
//! tools stay behind [`CommandRunner`].

mod command;
mod config;
mod error;
mod session;

pub use command::ConsoleCommand;
pub use config::Config;
pub use error::CoreError;
pub use session::Session;

// Re-export the component crates
pub use helm_host::{HostError, NavCall, Navigator, RecordingNavigator, Severity};
pub use helm_jump::{JumpEntry, JumpError, JumpStore};
pub use helm_nav::{descend, Anchor, DescendError, ParsedPath};
pub use helm_pick::{pick, reveal, PickError, PickScope};
pub use helm_search::{
    collect_matches, CommandRunner, CursorState, MatchCursor, ResultSeparator, RunOutput,
    SearchError, SearchQuery, SystemRunner,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
