//! The boundary to the tmux binary.

use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use crate::config::TmuxControlConfig;
use crate::launcher::{errors::LaunchError, types::LaunchPlan};

/// Runs tmux with a generated configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxLauncher {
    executable: String,
}

impl TmuxLauncher {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Pick the tmux binary from `config` for the current host.
    pub fn from_config(config: &TmuxControlConfig) -> Self {
        let host_name = match hostname::get() {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(e) => {
                warn!(event = "core.launcher.hostname_failed", error = %e);
                String::new()
            }
        };

        let executable = config.resolve_executable(&host_name);
        debug!(
            event = "core.launcher.executable_resolved",
            host_name = host_name,
            executable = executable
        );
        Self::new(executable)
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    fn command(&self, config_path: &Path) -> Command {
        let mut command = Command::new(&self.executable);
        command.arg("-f").arg(config_path).arg("attach");
        command
    }

    /// Write the plan's configuration to a temporary file and run
    /// `<executable> -f <file> attach`, waiting for tmux to exit.
    ///
    /// The temporary file is removed when this returns.
    ///
    /// # Errors
    ///
    /// - [`LaunchError::ConfigWriteFailed`] if the file cannot be written
    /// - [`LaunchError::SpawnFailed`] if the executable cannot be started
    /// - [`LaunchError::TmuxFailed`] if tmux exits unsuccessfully
    pub fn launch(&self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        let mut config_file =
            NamedTempFile::new().map_err(|source| LaunchError::ConfigWriteFailed { source })?;
        config_file
            .write_all(plan.configuration.as_bytes())
            .and_then(|()| config_file.flush())
            .map_err(|source| LaunchError::ConfigWriteFailed { source })?;

        info!(
            event = "core.launcher.tmux_started",
            executable = self.executable,
            mode = %plan.mode,
            config_file = %config_file.path().display()
        );

        let status = self
            .command(config_file.path())
            .status()
            .map_err(|e| LaunchError::SpawnFailed {
                executable: self.executable.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            error!(
                event = "core.launcher.tmux_failed",
                executable = self.executable,
                code = ?status.code()
            );
            return Err(LaunchError::TmuxFailed {
                executable: self.executable.clone(),
                code: status.code(),
            });
        }

        info!(event = "core.launcher.tmux_completed", mode = %plan.mode);
        Ok(())
    }
}
