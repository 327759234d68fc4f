use crate::errors::{TmuxControlError, describe_exit};
use crate::scripts::ScriptError;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error(transparent)]
    Scripts(#[from] ScriptError),

    #[error("Failed to write tmux configuration: {source}")]
    ConfigWriteFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start '{executable}': {message}")]
    SpawnFailed { executable: String, message: String },

    #[error("'{executable}' {}", describe_exit(.code))]
    TmuxFailed {
        executable: String,
        code: Option<i32>,
    },
}

impl TmuxControlError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::Scripts(e) => e.error_code(),
            LaunchError::ConfigWriteFailed { .. } => "TMUX_CONFIG_WRITE_FAILED",
            LaunchError::SpawnFailed { .. } => "TMUX_SPAWN_FAILED",
            LaunchError::TmuxFailed { .. } => "TMUX_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            LaunchError::Scripts(e) => e.is_user_error(),
            LaunchError::SpawnFailed { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_error_is_transparent() {
        let error = LaunchError::from(ScriptError::DirectoryNotFound {
            path: "scripts".to_string(),
        });
        assert_eq!(error.to_string(), "Script directory not found: 'scripts'");
        assert_eq!(error.error_code(), "SCRIPT_DIRECTORY_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_tmux_failed_display() {
        let error = LaunchError::TmuxFailed {
            executable: "tmux".to_string(),
            code: Some(1),
        };
        assert_eq!(error.to_string(), "'tmux' exited with code 1");
        assert_eq!(error.error_code(), "TMUX_FAILED");
        assert!(!error.is_user_error());

        let signalled = LaunchError::TmuxFailed {
            executable: "tmux".to_string(),
            code: None,
        };
        assert_eq!(signalled.to_string(), "'tmux' was terminated by a signal");
    }

    #[test]
    fn test_spawn_failed_is_user_error() {
        let error = LaunchError::SpawnFailed {
            executable: "/opt/tmux".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert!(error.is_user_error());
        assert_eq!(error.error_code(), "TMUX_SPAWN_FAILED");
    }
}
