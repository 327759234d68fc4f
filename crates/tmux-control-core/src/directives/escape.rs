//! Quoting for tmux configuration lines and the shell inside panes.

/// Quote a string as one tmux configuration argument.
///
/// Single quotes suppress all expansion in tmux; embedded single quotes are
/// closed, emitted inside double quotes and reopened.
pub fn tmux_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// Render `s` as a single shell word.
///
/// Plain paths are returned unchanged so the typed command reads naturally;
/// anything with shell metacharacters or whitespace is single-quoted.
pub fn shell_word(s: &str) -> String {
    let is_plain = !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | '=' | ':' | ',' | '@' | '%')
        });

    if is_plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\"'\"'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmux_quote() {
        assert_eq!(tmux_quote("deploy.sh"), "'deploy.sh'");
        assert_eq!(tmux_quote("it's.sh"), "'it'\"'\"'s.sh'");
        assert_eq!(tmux_quote("#{pane_id}"), "'#{pane_id}'");
    }

    #[test]
    fn test_shell_word_plain_path() {
        assert_eq!(shell_word("/home/me/scripts/run1.sh"), "/home/me/scripts/run1.sh");
    }

    #[test]
    fn test_shell_word_quotes_metacharacters() {
        assert_eq!(shell_word("/tmp/with space.sh"), "'/tmp/with space.sh'");
        assert_eq!(shell_word("/tmp/$(whoami).sh"), "'/tmp/$(whoami).sh'");
        assert_eq!(shell_word("/tmp/a;b.sh"), "'/tmp/a;b.sh'");
        assert_eq!(shell_word("/tmp/it's.sh"), "'/tmp/it'\"'\"'s.sh'");
        assert_eq!(shell_word(""), "''");
    }
}
