//! Built-in default values for configuration fields.

use std::path::PathBuf;

use crate::scripts::ExtensionFilter;

/// Run-mode script directory, relative to the working directory.
pub fn default_run_directory() -> PathBuf {
    PathBuf::from("scripts")
}

/// Run-mode extension requirement.
pub fn default_run_extension() -> ExtensionFilter {
    ExtensionFilter::parse("sh")
}

/// tmux binary looked up in PATH.
pub fn default_executable() -> String {
    "tmux".to_string()
}

/// Programs the layouts start inside their panes.
pub fn default_prerequisite_programs() -> Vec<String> {
    ["tmux", "ranger", "htop", "elinks", "cmus"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Name of the per-user and per-directory config directory.
pub const CONFIG_DIR_NAME: &str = ".tmux-control";

/// Name of the config file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";
