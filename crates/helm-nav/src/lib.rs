//! Helm navigation
//!
//! Turns a user-typed target path into directory creation plus a sequence of
//! host navigation steps, leaving the user inside the deepest created
//! directory:
//! - `mkcd a/b/c` — create `a/b/c` under the current directory and walk in
//! - hidden or `..` segments are entered directly, everything else goes
//!   through an exact-name selection so the new entry ends up highlighted

mod anchor;
mod descend;
mod error;

pub use anchor::{Anchor, ParsedPath};
pub use descend::descend;
pub use error::DescendError;

pub type Result<T> = std::result::Result<T, DescendError>;
