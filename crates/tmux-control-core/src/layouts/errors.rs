use crate::errors::TmuxControlError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error(
        "Unknown layout mode '{mode}'. Supported modes: analysis, edit, detail, work, badass, nvidia, run"
    )]
    UnknownMode { mode: String },
}

impl TmuxControlError for LayoutError {
    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::UnknownMode { .. } => "UNKNOWN_LAYOUT_MODE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
