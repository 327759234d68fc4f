use std::path::PathBuf;

/// Index of the window a session is created with.
pub const BASE_WINDOW_INDEX: usize = 0;

/// One generated tmux window for a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDirective {
    /// tmux window index (1-based; 0 is the base window)
    pub index: usize,
    /// Window name, the script's base name
    pub name: String,
    /// Absolute script path, typed into the window's shell
    pub path: PathBuf,
}
