//! Configuration type definitions for tmux-control.
//!
//! All fields are optional so that a partial file only overrides what it
//! names; the accessor methods fall back to the built-in defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [layout]
//! default = "detail"
//!
//! [run]
//! directory = "scripts"
//! extension = "sh"
//!
//! [prerequisites]
//! programs = ["tmux", "ranger"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::defaults;
use crate::layouts::LayoutMode;
use crate::scripts::ExtensionFilter;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TmuxControlConfig {
    /// Layout selection
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Run-mode script directory settings
    #[serde(default)]
    pub run: RunConfig,

    /// tmux executable selection
    #[serde(default)]
    pub tmux: TmuxConfig,

    /// Prerequisite program installation
    #[serde(default)]
    pub prerequisites: PrerequisitesConfig,
}

/// Layout selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LayoutConfig {
    /// Mode used when no mode flag is given. Default: work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<LayoutMode>,
}

/// Run-mode settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RunConfig {
    /// Directory whose scripts get one window each. Default: `scripts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Required extension substring, or "none". Default: `sh`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<ExtensionFilter>,
}

/// tmux executable selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TmuxConfig {
    /// Explicit tmux binary; wins over host matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    /// Host name fragment to tmux binary, for machines where tmux lives
    /// outside PATH. The first fragment (in key order) contained in the
    /// host name wins.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub host_executables: BTreeMap<String, String>,
}

/// Prerequisite program installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PrerequisitesConfig {
    /// Whether missing programs are installed before launch. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Programs to check for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programs: Option<Vec<String>>,
}

impl TmuxControlConfig {
    pub fn default_mode(&self) -> LayoutMode {
        self.layout.default.unwrap_or_default()
    }

    pub fn run_directory(&self) -> PathBuf {
        self.run
            .directory
            .clone()
            .unwrap_or_else(defaults::default_run_directory)
    }

    pub fn run_extension(&self) -> ExtensionFilter {
        self.run
            .extension
            .clone()
            .unwrap_or_else(defaults::default_run_extension)
    }

    pub fn prerequisites_enabled(&self) -> bool {
        self.prerequisites.enabled.unwrap_or(true)
    }

    pub fn prerequisite_programs(&self) -> Vec<String> {
        self.prerequisites
            .programs
            .clone()
            .unwrap_or_else(defaults::default_prerequisite_programs)
    }

    /// Pick the tmux binary for the machine called `host_name`.
    ///
    /// Resolution order:
    /// 1. `tmux.executable`
    /// 2. the first `tmux.host_executables` entry whose key occurs in `host_name`
    /// 3. `tmux` from PATH
    pub fn resolve_executable(&self, host_name: &str) -> String {
        if let Some(executable) = &self.tmux.executable {
            return executable.clone();
        }

        self.tmux
            .host_executables
            .iter()
            .find(|(fragment, _)| host_name.contains(fragment.as_str()))
            .map(|(_, executable)| executable.clone())
            .unwrap_or_else(defaults::default_executable)
    }
}
