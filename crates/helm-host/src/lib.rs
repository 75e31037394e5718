//! Helm host contract
//!
//! The host file manager (directory model, selection UI, console) is an
//! external collaborator. Everything helm needs from it goes through the
//! [`Navigator`] trait; the host's internals stay out of scope.

mod error;
mod navigator;
mod recorder;

pub use error::HostError;
pub use navigator::{Navigator, Severity};
pub use recorder::{NavCall, RecordingNavigator};

pub type Result<T> = std::result::Result<T, HostError>;
