//! Building the final tmux configuration and handing it to tmux.

pub mod errors;
pub mod handler;
pub mod tmux;
pub mod types;

pub use errors::LaunchError;
pub use handler::build_plan;
pub use tmux::TmuxLauncher;
pub use types::{LaunchPlan, RunOptions};
