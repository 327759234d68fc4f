use crate::errors::{TmuxControlError, describe_exit};

#[derive(Debug, thiserror::Error)]
pub enum PrerequisiteError {
    #[error("Failed to run '{installer}' to install '{program}': {message}")]
    InstallerUnavailable {
        installer: String,
        program: String,
        message: String,
    },

    #[error("Installing '{program}' failed: installer {}", describe_exit(.code))]
    InstallFailed { program: String, code: Option<i32> },
}

impl TmuxControlError for PrerequisiteError {
    fn error_code(&self) -> &'static str {
        match self {
            PrerequisiteError::InstallerUnavailable { .. } => "INSTALLER_UNAVAILABLE",
            PrerequisiteError::InstallFailed { .. } => "PREREQUISITE_INSTALL_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PrerequisiteError::InstallerUnavailable { .. })
    }
}
