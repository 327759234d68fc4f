//! Prerequisite programs for the layouts.
//!
//! The layouts launch ranger, htop, elinks and cmus inside tmux. Missing
//! programs are installed through a [`PackageInstaller`] before tmux starts.

pub mod apt;
pub mod errors;
pub mod handler;
pub mod traits;

pub use apt::AptInstaller;
pub use errors::PrerequisiteError;
pub use handler::ensure_prerequisites;
pub use traits::PackageInstaller;
