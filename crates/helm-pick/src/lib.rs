//! Helm pick
//!
//! Interactive commands built on the search runner: feed candidate paths to
//! a fuzzy picker (`fzf` by default) and navigate to the choice, or reveal
//! the host's selection in the OS file browser.

mod error;
mod picker;
mod reveal;

pub use error::PickError;
pub use picker::{pick, PickScope};
pub use reveal::{reveal, reveal_script};

pub type Result<T> = std::result::Result<T, PickError>;
