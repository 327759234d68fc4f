//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tmux-control/config.toml`
//! 3. **Project config** - `./.tmux-control/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the CLI)

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{
    LayoutConfig, PrerequisitesConfig, RunConfig, TmuxConfig, TmuxControlConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.tmux-control/config.toml`)
/// 3. Project config (`./.tmux-control/config.toml`)
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<TmuxControlConfig, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
    let current_dir = std::env::current_dir().map_err(|source| ConfigError::ReadFailed {
        path: ".".to_string(),
        source,
    })?;

    load_hierarchy_from(&[config_path(&home_dir), config_path(&current_dir)])
}

/// Load and merge the given config files in order, then validate.
///
/// Files that do not exist are skipped.
pub fn load_hierarchy_from(paths: &[PathBuf]) -> Result<TmuxControlConfig, ConfigError> {
    let mut config = TmuxControlConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => {
                debug!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(e) if e.is_not_found() => {
                debug!(event = "core.config.file_missing", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Location of the config file under `base`.
pub fn config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<TmuxControlConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields are replaced only when the override sets them. Host
/// executable maps are merged key by key.
pub fn merge_configs(
    base: TmuxControlConfig,
    override_config: TmuxControlConfig,
) -> TmuxControlConfig {
    TmuxControlConfig {
        layout: LayoutConfig {
            default: override_config.layout.default.or(base.layout.default),
        },
        run: RunConfig {
            directory: override_config.run.directory.or(base.run.directory),
            extension: override_config.run.extension.or(base.run.extension),
        },
        tmux: TmuxConfig {
            executable: override_config.tmux.executable.or(base.tmux.executable),
            host_executables: {
                let mut merged = base.tmux.host_executables;
                merged.extend(override_config.tmux.host_executables);
                merged
            },
        },
        prerequisites: PrerequisitesConfig {
            enabled: override_config
                .prerequisites
                .enabled
                .or(base.prerequisites.enabled),
            programs: override_config
                .prerequisites
                .programs
                .or(base.prerequisites.programs),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::LayoutMode;
    use crate::scripts::ExtensionFilter;
    use tempfile::TempDir;

    fn write_config(base: &Path, content: &str) -> PathBuf {
        let path = config_path(base);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_hierarchy_from(&[
            config_path(&temp_dir.path().join("home")),
            config_path(&temp_dir.path().join("project")),
        ])
        .unwrap();
        assert_eq!(config, TmuxControlConfig::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let temp_dir = TempDir::new().unwrap();
        let user = write_config(
            &temp_dir.path().join("home"),
            r#"
[layout]
default = "edit"

[run]
directory = "user-scripts"
extension = "py"

[tmux.host_executables]
"cern.ch" = "/afs/cern/tmux"
"#,
        );
        let project = write_config(
            &temp_dir.path().join("project"),
            r#"
[run]
directory = "project-scripts"

[tmux.host_executables]
"gla.ac.uk" = "/afs/gla/tmux"
"#,
        );

        let config = load_hierarchy_from(&[user, project]).unwrap();
        assert_eq!(config.default_mode(), LayoutMode::Edit);
        assert_eq!(config.run_directory(), PathBuf::from("project-scripts"));
        assert_eq!(config.run_extension(), ExtensionFilter::parse("py"));
        assert_eq!(config.tmux.host_executables.len(), 2);
    }

    #[test]
    fn test_parse_error_fails() {
        let temp_dir = TempDir::new().unwrap();
        let broken = write_config(temp_dir.path(), "invalid toml [[[");
        let result = load_hierarchy_from(&[broken]);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            temp_dir.path(),
            r#"
[tmux]
executable = ""
"#,
        );
        let result = load_hierarchy_from(&[path]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_merge_keeps_base_when_override_unset() {
        let mut base = TmuxControlConfig::default();
        base.prerequisites.enabled = Some(false);
        base.tmux.executable = Some("/opt/tmux".to_string());

        let merged = merge_configs(base, TmuxControlConfig::default());
        assert!(!merged.prerequisites_enabled());
        assert_eq!(merged.resolve_executable("any"), "/opt/tmux");
    }

    #[test]
    fn test_merge_override_host_entry() {
        let mut base = TmuxControlConfig::default();
        base.tmux
            .host_executables
            .insert("cern.ch".to_string(), "/old/tmux".to_string());
        let mut override_config = TmuxControlConfig::default();
        override_config
            .tmux
            .host_executables
            .insert("cern.ch".to_string(), "/new/tmux".to_string());

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.resolve_executable("lxplus.cern.ch"), "/new/tmux");
    }
}
