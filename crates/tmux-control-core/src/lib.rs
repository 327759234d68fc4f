//! tmux-control-core: preset tmux layouts and a per-script window runner
//!
//! This library builds tmux configuration text for a set of named layouts and
//! hands it to tmux. It is used by the `tmux-control` CLI.
//!
//! # Main Entry Points
//!
//! - [`scripts`] - Enumerate a script directory in natural order
//! - [`directives`] - Turn enumerated scripts into tmux window directives
//! - [`layouts`] - Static layout templates per mode
//! - [`launcher`] - Build the final configuration and run tmux with it
//! - [`prerequisites`] - Check for and install required programs
//! - [`config`] - Configuration management

pub mod config;
pub mod directives;
pub mod errors;
pub mod events;
pub mod launcher;
pub mod layouts;
pub mod logging;
pub mod prerequisites;
pub mod scripts;

// Re-export commonly used types at crate root for convenience
pub use config::TmuxControlConfig;
pub use directives::WindowDirective;
pub use launcher::{LaunchError, LaunchPlan, RunOptions, TmuxLauncher};
pub use layouts::LayoutMode;
pub use prerequisites::{AptInstaller, PackageInstaller, PrerequisiteError};
pub use scripts::{ExtensionFilter, ScriptError, ScriptFile};

// Re-export logging initialization
pub use logging::init_logging;
