use std::error::Error;

/// Base trait for all application errors
pub trait TmuxControlError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Describe how a child process ended. `None` means it was killed by a signal.
pub(crate) fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Could not find home directory")]
    HomeDirectoryNotFound,

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ConfigError {
    /// Whether this error only means the config file is absent.
    ///
    /// Missing files are expected anywhere in the hierarchy and are skipped.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ReadFailed { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl TmuxControlError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::HomeDirectoryNotFound => "CONFIG_HOME_NOT_FOUND",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}
