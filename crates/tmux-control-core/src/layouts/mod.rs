//! Static tmux layouts.
//!
//! Each [`LayoutMode`] owns a fixed pane template. All modes share the same
//! preamble: `C-a` prefix, split bindings, the yellow colour scheme, vi copy
//! mode, mouse support and a timestamped status line.

pub mod errors;
pub mod render;
pub mod templates;
pub mod types;

pub use errors::LayoutError;
pub use render::render_configuration;
pub use types::LayoutMode;
