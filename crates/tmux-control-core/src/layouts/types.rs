use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::layouts::errors::LayoutError;
use crate::layouts::templates;

/// The named layouts tmux-control can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// ranger above a terminal
    Analysis,
    /// terminal beside ranger
    Edit,
    /// ranger, two terminals and arXiv stacked beside ranger
    Detail,
    /// ranger, terminal, ranger and cmus
    #[default]
    Work,
    /// detail plus a cmus pane
    Badass,
    /// nvidia-smi watch above htop and a terminal
    Nvidia,
    /// one window per script in a directory
    Run,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 7] = [
        LayoutMode::Analysis,
        LayoutMode::Edit,
        LayoutMode::Detail,
        LayoutMode::Work,
        LayoutMode::Badass,
        LayoutMode::Nvidia,
        LayoutMode::Run,
    ];

    /// The canonical lowercase name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Analysis => "analysis",
            LayoutMode::Edit => "edit",
            LayoutMode::Detail => "detail",
            LayoutMode::Work => "work",
            LayoutMode::Badass => "badass",
            LayoutMode::Nvidia => "nvidia",
            LayoutMode::Run => "run",
        }
    }

    /// Name of the tmux session this mode creates.
    pub fn session_name(&self) -> &'static str {
        match self {
            LayoutMode::Analysis => "ANALYSIS",
            LayoutMode::Edit => "EDITING",
            LayoutMode::Detail => "DETAIL",
            LayoutMode::Work => "WORK",
            LayoutMode::Badass => "BADASS",
            LayoutMode::Nvidia => "NVIDIA",
            LayoutMode::Run => "RUN",
        }
    }

    /// Pane commands for this mode, without the shared preamble.
    pub fn template(&self) -> &'static str {
        match self {
            LayoutMode::Analysis => templates::ANALYSIS,
            LayoutMode::Edit => templates::EDIT,
            LayoutMode::Detail => templates::DETAIL,
            LayoutMode::Work => templates::WORK,
            LayoutMode::Badass => templates::BADASS,
            LayoutMode::Nvidia => templates::NVIDIA,
            LayoutMode::Run => templates::RUN,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analysis" => Ok(LayoutMode::Analysis),
            "edit" => Ok(LayoutMode::Edit),
            "detail" => Ok(LayoutMode::Detail),
            "work" => Ok(LayoutMode::Work),
            "badass" => Ok(LayoutMode::Badass),
            "nvidia" | "nvidia-monitoring" => Ok(LayoutMode::Nvidia),
            "run" => Ok(LayoutMode::Run),
            _ => Err(LayoutError::UnknownMode {
                mode: s.to_string(),
            }),
        }
    }
}
