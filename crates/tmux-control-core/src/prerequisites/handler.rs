use tracing::{error, info};

use crate::prerequisites::{errors::PrerequisiteError, traits::PackageInstaller};

/// Make sure every program in `programs` is available.
///
/// Missing programs are installed in order. Stops at the first failed
/// installation. Returns the programs that had to be installed.
pub fn ensure_prerequisites<I: PackageInstaller + ?Sized>(
    installer: &I,
    programs: &[String],
) -> Result<Vec<String>, PrerequisiteError> {
    info!(
        event = "core.prerequisites.check_started",
        installer = installer.name(),
        count = programs.len()
    );

    let mut installed = Vec::new();
    for program in programs {
        match installer.ensure(program) {
            Ok(true) => installed.push(program.clone()),
            Ok(false) => {}
            Err(e) => {
                error!(
                    event = "core.prerequisites.install_failed",
                    program = program.as_str(),
                    error = %e
                );
                return Err(e);
            }
        }
    }

    info!(
        event = "core.prerequisites.check_completed",
        installed = installed.len()
    );

    Ok(installed)
}
