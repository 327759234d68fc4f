use std::path::PathBuf;

use crate::layouts::LayoutMode;
use crate::scripts::ExtensionFilter;

/// Inputs for run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub directory: PathBuf,
    pub extension: ExtensionFilter,
}

/// A fully rendered tmux configuration, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub mode: LayoutMode,
    /// Complete configuration text passed to `tmux -f`
    pub configuration: String,
    /// Number of script windows added after the base window
    pub script_windows: usize,
}
