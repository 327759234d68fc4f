use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Optional extension requirement for run mode.
///
/// The requirement is matched as a case-sensitive substring of the file's
/// extension including its leading dot, so `sh` accepts `.sh` and `.shell`,
/// and `.sh` accepts `.sh` too. The strings `none` (any case) and the empty
/// string disable filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ExtensionFilter {
    required: Option<String>,
}

impl ExtensionFilter {
    /// A filter that accepts every file.
    pub fn any() -> Self {
        Self { required: None }
    }

    /// Parse a user-supplied extension requirement.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            Self::any()
        } else {
            Self {
                required: Some(trimmed.to_string()),
            }
        }
    }

    /// The required substring, if filtering is enabled.
    pub fn required(&self) -> Option<&str> {
        self.required.as_deref()
    }

    /// Whether a file at `path` passes this filter.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(required) = &self.required else {
            return true;
        };

        match path.extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()).contains(required.as_str()),
            None => false,
        }
    }
}

impl From<String> for ExtensionFilter {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ExtensionFilter> for String {
    fn from(filter: ExtensionFilter) -> Self {
        filter.required.unwrap_or_else(|| "none".to_string())
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.required {
            Some(required) => write!(f, "{}", required),
            None => write!(f, "none"),
        }
    }
}

/// A script discovered in the run-mode directory.
///
/// Always holds an absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptFile {
    path: PathBuf,
}

impl ScriptFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, used as the tmux window name.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
