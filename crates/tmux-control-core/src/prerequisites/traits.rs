//! Package installer trait definition.

use crate::prerequisites::errors::PrerequisiteError;

/// Trait defining how prerequisite programs are detected and installed.
///
/// The system implementation shells out to a package manager; tests supply
/// their own.
pub trait PackageInstaller {
    /// Name of the installer for log events (e.g., "apt-get").
    fn name(&self) -> &'static str;

    /// Check whether `program` is available in PATH.
    fn is_installed(&self, program: &str) -> bool;

    /// Install the package providing `program`.
    fn install(&self, program: &str) -> Result<(), PrerequisiteError>;

    /// Install `program` only if it is missing.
    ///
    /// Returns `true` if an installation took place.
    fn ensure(&self, program: &str) -> Result<bool, PrerequisiteError> {
        if self.is_installed(program) {
            return Ok(false);
        }
        self.install(program)?;
        Ok(true)
    }
}
