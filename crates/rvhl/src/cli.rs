//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rvhl::{ColorMode, Format, Theme};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "rvhl")]
#[command(about = "RISC-V assembly syntax highlighter")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    /// Color theme
    #[arg(long, global = true, value_enum, default_value = "nord")]
    pub theme: ThemeArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highlight a source file
    Highlight {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "ansi")]
        format: FormatArg,

        /// Language id
        #[arg(short, long, default_value = "riscv")]
        language: String,

        /// Emit a full HTML page with an embedded stylesheet
        #[arg(long)]
        standalone: bool,

        /// When to use terminal colors
        #[arg(long, value_enum, default_value = "auto")]
        color: ColorArg,
    },
    /// Show which rule classifies the text at a position
    Classify {
        /// Text to classify
        text: String,

        /// Byte offset to classify at
        #[arg(long, default_value = "0")]
        at: usize,

        /// Language id
        #[arg(short, long, default_value = "riscv")]
        language: String,
    },
    /// Print a language's rule table in priority order
    Rules {
        /// Language id
        #[arg(short, long, default_value = "riscv")]
        language: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List registered languages
    Languages,
    /// Print the theme stylesheet for HTML output
    Css,
    /// Highlight fenced code blocks in markdown files
    Docs {
        /// Markdown files
        #[arg(value_name = "MARKDOWN", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Number of parallel jobs (0 = auto)
        #[arg(short = 'j', long, default_value = "0")]
        jobs: usize,
    },
}

/// Output format argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Prism-compatible HTML
    Html,
    /// Terminal colors
    Ansi,
    /// One line per token
    Tokens,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Ansi => Self::Ansi,
            FormatArg::Tokens => Self::Tokens,
        }
    }
}

/// Color mode argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Theme argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    /// Dark theme used by the documentation site
    Nord,
    /// No token colors
    Plain,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Nord => Self::nord(),
            ThemeArg::Plain => Self::plain(),
        }
    }
}

/// Listing format for table-like commands.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Text,
    /// Raw key-value output (for scripting)
    Raw,
}
