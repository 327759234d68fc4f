//! # Configuration System
//!
//! Hierarchical TOML configuration for tmux-control.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tmux-control/config.toml` (global user preferences)
//! 3. **Project config** - `./.tmux-control/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.tmux-control/config.toml
//! [layout]
//! default = "edit"
//!
//! [run]
//! directory = "jobs"
//! extension = "none"
//!
//! [tmux]
//! executable = "/usr/local/bin/tmux"
//!
//! [tmux.host_executables]
//! "cern.ch" = "/afs/cern.ch/user/me/local/bin/tmux"
//!
//! [prerequisites]
//! enabled = false
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use tmux_control_core::config::TmuxControlConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TmuxControlConfig::load_hierarchy()?;
//!     let directory = config.run_directory();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{LayoutConfig, PrerequisitesConfig, RunConfig, TmuxConfig, TmuxControlConfig};

impl TmuxControlConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}
