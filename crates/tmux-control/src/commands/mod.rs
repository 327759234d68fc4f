use clap::ArgMatches;
use tracing::error;

use tmux_control_core::events;

pub mod helpers;

mod completions;
mod launch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches.subcommand_name().unwrap_or("launch");
    events::log_app_startup(command);

    let result = match matches.subcommand() {
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        Some((name, _)) => {
            error!(event = "cli.command_unknown", command = name);
            Err("Unknown command".into())
        }
        None => launch::handle_launch_command(matches),
    };

    events::log_app_shutdown(command, result.is_ok());
    result
}
