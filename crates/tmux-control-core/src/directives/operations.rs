use crate::directives::escape::{shell_word, tmux_quote};
use crate::directives::types::{BASE_WINDOW_INDEX, WindowDirective};
use crate::scripts::ScriptFile;

/// Pair each script with its window: position `i` becomes window `i + 1`.
pub fn assemble(scripts: &[ScriptFile]) -> Vec<WindowDirective> {
    scripts
        .iter()
        .enumerate()
        .map(|(position, script)| WindowDirective {
            index: position + 1,
            name: script.base_name(),
            path: script.path().to_path_buf(),
        })
        .collect()
}

/// Render directives as tmux configuration lines.
///
/// Each window is created at its index, named, selected and handed
/// its script. Window names follow `--` so a script called `-n.sh` is not
/// parsed as a tmux flag. The final line always selects the base window,
/// including when there are no directives at all.
pub fn render(directives: &[WindowDirective]) -> String {
    let mut lines = Vec::with_capacity(directives.len() * 4 + 1);

    for directive in directives {
        let command = shell_word(&directive.path.to_string_lossy());
        lines.push(format!("new-window -t :{}", directive.index));
        lines.push(format!("rename-window -- {}", tmux_quote(&directive.name)));
        lines.push(format!("select-window -t {}", directive.index));
        lines.push(format!("send-keys {} Enter", tmux_quote(&command)));
    }

    lines.push(format!("select-window -t {}", BASE_WINDOW_INDEX));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
