//! Debian/Ubuntu installer backed by `apt-get`.

use std::process::Command;
use tracing::info;

use crate::prerequisites::errors::PrerequisiteError;
use crate::prerequisites::traits::PackageInstaller;

/// Installs missing programs with `sudo apt-get -y install`.
pub struct AptInstaller;

impl AptInstaller {
    fn install_command(program: &str) -> Command {
        let mut command = Command::new("sudo");
        command.args(["apt-get", "-y", "install", program]);
        command
    }
}

impl PackageInstaller for AptInstaller {
    fn name(&self) -> &'static str {
        "apt-get"
    }

    fn is_installed(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn install(&self, program: &str) -> Result<(), PrerequisiteError> {
        info!(event = "core.prerequisites.apt_install_started", program = program);

        let status = Self::install_command(program).status().map_err(|e| {
            PrerequisiteError::InstallerUnavailable {
                installer: self.name().to_string(),
                program: program.to_string(),
                message: e.to_string(),
            }
        })?;

        if !status.success() {
            return Err(PrerequisiteError::InstallFailed {
                program: program.to_string(),
                code: status.code(),
            });
        }

        info!(event = "core.prerequisites.apt_install_completed", program = program);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apt_installer_name() {
        assert_eq!(AptInstaller.name(), "apt-get");
    }

    #[test]
    fn test_apt_install_command() {
        let command = AptInstaller::install_command("ranger");
        assert_eq!(command.get_program(), "sudo");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["apt-get", "-y", "install", "ranger"]);
    }

    #[test]
    fn test_apt_detects_missing_program() {
        assert!(!AptInstaller.is_installed("tmux-control-no-such-program-xyz"));
    }
}
