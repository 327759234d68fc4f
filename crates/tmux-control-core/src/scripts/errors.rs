use crate::errors::TmuxControlError;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script directory not found: '{path}'")]
    DirectoryNotFound { path: String },

    #[error("Failed to read script directory '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TmuxControlError for ScriptError {
    fn error_code(&self) -> &'static str {
        match self {
            ScriptError::DirectoryNotFound { .. } => "SCRIPT_DIRECTORY_NOT_FOUND",
            ScriptError::ReadFailed { .. } => "SCRIPT_DIRECTORY_READ_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ScriptError::DirectoryNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_display() {
        let error = ScriptError::DirectoryNotFound {
            path: "/tmp/no-such-scripts".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Script directory not found: '/tmp/no-such-scripts'"
        );
        assert_eq!(error.error_code(), "SCRIPT_DIRECTORY_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_read_failed_is_not_user_error() {
        let error = ScriptError::ReadFailed {
            path: "/root/locked".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.error_code(), "SCRIPT_DIRECTORY_READ_FAILED");
        assert!(!error.is_user_error());
        assert!(error.to_string().contains("/root/locked"));
    }
}
