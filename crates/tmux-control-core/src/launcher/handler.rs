use tracing::{error, info};

use crate::directives;
use crate::launcher::{errors::LaunchError, types::*};
use crate::layouts::{LayoutMode, render_configuration};
use crate::scripts;

/// Render the tmux configuration for `mode`.
///
/// For [`LayoutMode::Run`] the script directory in `run` is enumerated and
/// one window per script is appended. Other modes ignore `run`.
///
/// # Errors
///
/// Returns [`LaunchError::Scripts`] if run mode cannot enumerate its
/// directory. Nothing is rendered in that case.
pub fn build_plan(mode: LayoutMode, run: &RunOptions) -> Result<LaunchPlan, LaunchError> {
    info!(event = "core.launcher.plan_started", mode = %mode);

    let (extra, script_windows) = if mode == LayoutMode::Run {
        let scripts = scripts::enumerate(&run.directory, &run.extension).inspect_err(|e| {
            error!(
                event = "core.launcher.plan_failed",
                mode = %mode,
                error = %e
            );
        })?;
        let windows = directives::assemble(&scripts);
        (directives::render(&windows), windows.len())
    } else {
        (String::new(), 0)
    };

    let configuration = render_configuration(mode, &extra);

    info!(
        event = "core.launcher.plan_completed",
        mode = %mode,
        script_windows,
        lines = configuration.lines().count()
    );

    Ok(LaunchPlan {
        mode,
        configuration,
        script_windows,
    })
}
