//! Pane templates and the preamble shared by every layout.
//!
//! Pane numbers refer to tmux's pane order after the preceding splits.

/// Keybindings, colours, mouse and status line.
pub const PREAMBLE: &str = "\
set-option -g prefix C-a
unbind C-b
bind - split-window -v
bind | split-window -h
## colours
set-option -g window-status-current-style bg=yellow
set-option -g pane-active-border-style fg=yellow
set -g status-style fg=black,bg='#FEFE0A'
set -g message-style fg=black,bg='#FEFE0A'
set -g message-command-style fg=black,bg='#FEFE0A'
set-option -g mode-keys vi
set -g history-limit 5000
## mouse mode
set -g mouse on
## status
set-option -g status-interval 1
set-option -g status-left-length 20
set-option -g status-left ''
set-option -g status-right '%Y-%m-%dT%H%M%S '
";

pub const ANALYSIS: &str = "\
# split up-down
split-window -v
select-pane -t 0
send-keys 'ranger' Enter
select-pane -t 1
send-keys 'clear' Enter
";

pub const EDIT: &str = "\
# split left-right
split-window -h
select-pane -t 0
send-keys 'clear' Enter
select-pane -t 1
send-keys 'ranger' Enter
";

pub const DETAIL: &str = "\
# split left-right, then stack the left column
split-window -h
select-pane -t 0
split-window -v
select-pane -t 0
split-window -v
select-pane -t 0
split-window -v
select-pane -t 0
send-keys 'ranger' Enter
select-pane -t 1
send-keys 'clear' Enter
select-pane -t 2
select-pane -t 3
send-keys 'elinks http://arxiv.org/list/hep-ph/new' Enter
select-pane -t 4
send-keys 'ranger' Enter
";

pub const WORK: &str = "\
split-window -v
select-pane -t 1
split-window -v
select-pane -t 2
split-window -h
select-pane -t 0
send-keys 'ranger' Enter
select-pane -t 1
send-keys 'clear' Enter
select-pane -t 2
send-keys 'ranger' Enter
select-pane -t 3
send-keys 'cmus' Enter
";

pub const BADASS: &str = "\
# split left-right, then stack the left column
split-window -h
select-pane -t 0
split-window -v
select-pane -t 0
split-window -v
select-pane -t 0
split-window -v
select-pane -t 3
split-window -v
select-pane -t 0
send-keys 'ranger' Enter
select-pane -t 1
send-keys 'clear' Enter
select-pane -t 2
select-pane -t 3
send-keys 'elinks http://arxiv.org/list/hep-ph/new' Enter
select-pane -t 4
send-keys 'cmus' Enter
select-pane -t 5
send-keys 'ranger' Enter
select-pane -t 4
";

pub const NVIDIA: &str = "\
# GPU status across the top, htop and a terminal below
split-window -v
select-pane -t 1
split-window -h
select-pane -t 0
send-keys 'watch -n 1 nvidia-smi' Enter
select-pane -t 1
send-keys 'htop' Enter
select-pane -t 2
send-keys 'clear' Enter
";

/// Run mode starts from a single terminal window; script windows follow.
pub const RUN: &str = "\
rename-window 'terminal'
send-keys 'clear' Enter
";
