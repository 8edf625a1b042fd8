use clap::{Args, ValueEnum};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Options shared by both demo binaries.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// When to colour provider messages
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Installs the tracing subscriber and the colour override.
    ///
    /// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug`
    /// with `--verbose`.
    pub fn apply(&self) {
        let default_level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(default_level.into())
                    .from_env_lossy(),
            )
            .with_writer(std::io::stderr)
            .init();

        colored::control::set_override(self.color.enabled(std::io::stdout().is_terminal()));
    }
}
