use clap::ArgMatches;
use tracing::{error, info};

use tmux_control_core::events;
use tmux_control_core::launcher::build_plan;
use tmux_control_core::prerequisites::ensure_prerequisites;
use tmux_control_core::{AptInstaller, TmuxLauncher};

use super::helpers;

pub(crate) fn handle_launch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = helpers::load_config_with_warning();
    let mode = helpers::selected_mode(matches, &config);
    let run = helpers::run_options(matches, &config);
    let print_only = matches.get_flag("print");

    info!(
        event = "cli.launch_started",
        mode = %mode,
        directory = %run.directory.display(),
        extension = %run.extension,
        print_only = print_only
    );

    // Build the whole configuration before touching packages or tmux, so a
    // bad script directory aborts with nothing launched.
    let plan = match build_plan(mode, &run) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("❌ Failed to prepare {} layout: {}", mode, e);
            error!(event = "cli.launch_failed", mode = %mode, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };
    events::log_plan_ready(&plan);

    if print_only {
        print!("{}", plan.configuration);
        info!(event = "cli.print_completed", mode = %mode);
        return Ok(());
    }

    if config.prerequisites_enabled() && !matches.get_flag("no-install") {
        match ensure_prerequisites(&AptInstaller, &config.prerequisite_programs()) {
            Ok(installed) => {
                for program in installed {
                    println!("✅ Installed {}", program);
                }
            }
            Err(e) => {
                eprintln!("❌ Failed to install prerequisites: {}", e);
                eprintln!("   Hint: Use --no-install to skip the prerequisite check.");
                error!(event = "cli.prerequisites_failed", error = %e);
                events::log_app_error(&e);
                return Err(e.into());
            }
        }
    }

    let launcher = TmuxLauncher::from_config(&config);
    match launcher.launch(&plan) {
        Ok(()) => {
            info!(
                event = "cli.launch_completed",
                mode = %mode,
                script_windows = plan.script_windows
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to launch tmux: {}", e);
            error!(event = "cli.launch_failed", mode = %mode, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
