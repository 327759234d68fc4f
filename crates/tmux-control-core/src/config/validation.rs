//! Configuration validation.

use crate::config::types::TmuxControlConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] for empty executables,
/// empty host fragments, or empty prerequisite names.
pub fn validate_config(config: &TmuxControlConfig) -> Result<(), ConfigError> {
    if let Some(executable) = &config.tmux.executable
        && executable.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "tmux.executable cannot be empty".to_string(),
        });
    }

    for (fragment, executable) in &config.tmux.host_executables {
        if fragment.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "tmux.host_executables keys cannot be empty".to_string(),
            });
        }
        if executable.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("tmux.host_executables.\"{}\" cannot be empty", fragment),
            });
        }
    }

    if let Some(programs) = &config.prerequisites.programs
        && programs.iter().any(|p| p.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "prerequisites.programs cannot contain empty names".to_string(),
        });
    }

    if let Some(directory) = &config.run.directory
        && directory.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "run.directory cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TmuxControlConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_executable_rejected() {
        let mut config = TmuxControlConfig::default();
        config.tmux.executable = Some("  ".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("tmux.executable"));
    }

    #[test]
    fn test_empty_host_fragment_rejected() {
        let mut config = TmuxControlConfig::default();
        config
            .tmux
            .host_executables
            .insert(String::new(), "/bin/tmux".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_program_rejected() {
        let mut config = TmuxControlConfig::default();
        config.prerequisites.programs = Some(vec!["tmux".to_string(), "".to_string()]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_run_directory_rejected() {
        let mut config = TmuxControlConfig::default();
        config.run.directory = Some(PathBuf::new());
        assert!(validate_config(&config).is_err());
    }
}
