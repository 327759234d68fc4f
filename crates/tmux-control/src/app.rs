use clap::{Arg, ArgAction, ArgGroup, Command};

/// Layout flags, in help order. Each maps to the mode of the same name.
pub const MODE_FLAGS: [&str; 7] = [
    "analysis", "edit", "detail", "work", "badass", "nvidia", "run",
];

pub fn build_cli() -> Command {
    Command::new("tmux-control")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Configure and launch tmux with preset layouts")
        .long_about(
            "tmux-control generates a tmux configuration (C-a prefix, split bindings, colour \
            scheme, pane layout) and starts a tmux session with it.\n\n\
            Run mode opens one window per script found in a directory, in natural order \
            (step2.sh before step10.sh), and runs each script in its window.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("analysis")
                .long("analysis")
                .help("ranger above a terminal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("edit")
                .long("edit")
                .help("terminal beside ranger")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detail")
                .long("detail")
                .help("ranger, two terminals and arXiv beside ranger")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("work")
                .long("work")
                .help("ranger, terminal, ranger and cmus (default unless configured)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("badass")
                .long("badass")
                .help("detail layout plus cmus")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("nvidia")
                .long("nvidia")
                .visible_alias("nvidia-monitoring")
                .help("nvidia-smi above htop and a terminal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("run")
                .long("run")
                .help("One window per script in --directory")
                .action(ArgAction::SetTrue),
        )
        .group(ArgGroup::new("mode").args(MODE_FLAGS).multiple(false))
        .arg(
            Arg::new("directory")
                .long("directory")
                .value_name("PATH")
                .help("Script directory for --run (overrides config, default: scripts)"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .value_name("EXT")
                .help("Required script extension for --run, 'none' for all files (overrides config, default: sh)"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .help("Print the generated tmux configuration instead of launching tmux")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-install")
                .long("no-install")
                .help("Skip installing missing prerequisite programs")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}
