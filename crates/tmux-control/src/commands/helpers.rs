use clap::ArgMatches;
use std::path::PathBuf;
use tracing::warn;

use tmux_control_core::config::TmuxControlConfig;
use tmux_control_core::{ExtensionFilter, LayoutMode, RunOptions};

use crate::app::MODE_FLAGS;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> TmuxControlConfig {
    match TmuxControlConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.tmux-control/config.toml and ./.tmux-control/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            TmuxControlConfig::default()
        }
    }
}

/// The mode chosen by flag, or the configured default.
pub fn selected_mode(matches: &ArgMatches, config: &TmuxControlConfig) -> LayoutMode {
    MODE_FLAGS
        .iter()
        .find(|flag| matches.get_flag(flag))
        .and_then(|flag| flag.parse().ok())
        .unwrap_or_else(|| config.default_mode())
}

/// Run-mode options: CLI flags override config.
pub fn run_options(matches: &ArgMatches, config: &TmuxControlConfig) -> RunOptions {
    RunOptions {
        directory: matches
            .get_one::<String>("directory")
            .map(PathBuf::from)
            .unwrap_or_else(|| config.run_directory()),
        extension: matches
            .get_one::<String>("extension")
            .map(|raw| ExtensionFilter::parse(raw))
            .unwrap_or_else(|| config.run_extension()),
    }
}
