//! Lifecycle events for one tmux-control invocation.

use tracing::{error, info, warn};

use crate::errors::TmuxControlError;
use crate::launcher::LaunchPlan;

pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

/// A configuration was rendered and is about to be printed or launched.
pub fn log_plan_ready(plan: &LaunchPlan) {
    info!(
        event = "core.app.plan_ready",
        mode = %plan.mode,
        session = plan.mode.session_name(),
        script_windows = plan.script_windows,
        configuration_bytes = plan.configuration.len()
    );
}

pub fn log_app_shutdown(command: &str, success: bool) {
    info!(
        event = "core.app.shutdown_completed",
        command = command,
        success = success
    );
}

/// User errors are logged as warnings, everything else as errors.
pub fn log_app_error<E: TmuxControlError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = false
        );
    }
}
