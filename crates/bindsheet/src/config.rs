//! Command-line options and the resolved run configuration.

use clap::{Parser, ValueEnum};

/// Width used when the terminal size cannot be detected.
pub const FALLBACK_WIDTH: usize = 80;

/// Environment variable that overrides the detected terminal width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Gets the current terminal width, or None if not available.
///
/// A positive `COLUMNS` value wins over the size reported by the terminal.
pub fn terminal_width() -> Option<usize> {
    columns_override(std::env::var(COLUMNS_ENV).ok().as_deref())
        .or_else(|| terminal_size::terminal_size().map(|(w, _)| w.0 as usize))
}

fn columns_override(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&width| width > 0)
}

/// When to style headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Always emit color codes.
    #[default]
    Always,
    /// Emit color codes when standard output supports them.
    Auto,
    /// Never emit color codes.
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Auto => console::colors_enabled(),
            ColorChoice::Never => false,
        }
    }
}

/// Render a window manager's key-binding dump as a cheat sheet.
///
/// Reads the JSON produced by `hyprctl -j binds` on standard input.
#[derive(Debug, Parser)]
#[command(name = "bindsheet", version)]
#[command(after_help = "Example: hyprctl -j binds | bindsheet -k")]
pub struct Cli {
    /// Min width of the key-binding column
    #[arg(short, long, default_value_t = 8)]
    pub bind_width: usize,

    /// Min width of the description column
    #[arg(short, long, default_value_t = 0)]
    pub desc_width: usize,

    /// Print the list of key symbols
    #[arg(short, long)]
    pub key: bool,

    /// Hide the list of key-bindings
    #[arg(short = 'n', long)]
    pub hide: bool,

    /// Number of spaces between columns
    #[arg(short, long, default_value_t = 2)]
    pub spacing: usize,

    /// Width of the print area [default: terminal width, or 80]
    #[arg(short, long)]
    pub width: Option<usize>,

    /// When to color headings
    #[arg(long, value_enum, default_value_t = ColorChoice::Always)]
    pub color: ColorChoice,
}

/// Everything a run needs, independent of how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_width: usize,
    pub desc_width: usize,
    pub show_legend: bool,
    pub hide_bindings: bool,
    pub spacing: usize,
    pub width: usize,
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_width: 8,
            desc_width: 0,
            show_legend: false,
            hide_bindings: false,
            spacing: 2,
            width: FALLBACK_WIDTH,
            color: ColorChoice::Always,
        }
    }
}

impl Config {
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn hide_bindings(mut self, hide: bool) -> Self {
        self.hide_bindings = hide;
        self
    }

    pub fn bind_width(mut self, width: usize) -> Self {
        self.bind_width = width;
        self
    }

    pub fn desc_width(mut self, width: usize) -> Self {
        self.desc_width = width;
        self
    }

    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            bind_width: cli.bind_width,
            desc_width: cli.desc_width,
            show_legend: cli.key,
            hide_bindings: cli.hide,
            spacing: cli.spacing,
            width: cli
                .width
                .or_else(terminal_width)
                .unwrap_or(FALLBACK_WIDTH),
            color: cli.color,
        }
    }
}
