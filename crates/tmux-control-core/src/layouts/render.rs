use crate::layouts::templates::PREAMBLE;
use crate::layouts::types::LayoutMode;

/// Build the complete tmux configuration for `mode`.
///
/// `extra` is appended after the mode's own template; run mode passes its
/// window directives here. Panes are kept open while the configuration is
/// applied so that a failing command does not collapse the layout.
pub fn render_configuration(mode: LayoutMode, extra: &str) -> String {
    let mut config = String::new();
    config.push_str("set -g set-remain-on-exit on\n");
    config.push_str(&format!("new -s \"{}\"\n", mode.session_name()));
    config.push_str(PREAMBLE);
    config.push_str("## run programs in panes\n");
    config.push_str(mode.template());
    config.push_str(extra);
    if !extra.is_empty() && !extra.ends_with('\n') {
        config.push('\n');
    }
    config.push_str("set -g set-remain-on-exit off\n");
    config
}
