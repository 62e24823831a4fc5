use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "sloc-delta")]
#[command(
    author,
    version,
    about = "Compare two versions of a project by physical lines, structure and changed lines"
)]
#[command(long_about = "Counts physical and logical source lines, extracts class and method \
    structure, and reports added/removed lines between an old and a new version of a project.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Non-compliant files found (with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare an old and a new version of a project (directories or single files)
    Compare(CompareArgs),

    /// Count logical and physical lines of one version
    Count(CountArgs),

    /// Show a line-by-line annotated diff of two files
    Diff(DiffArgs),

    /// Wrap lines longer than the limit using a continuation marker
    Wrap(WrapArgs),
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Old version (directory or file)
    pub old: PathBuf,

    /// New version (directory or file)
    pub new: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extensions to compare (comma-separated, e.g., py,pyi)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Length-change ratio at which a changed line counts as major (0.0-1.0]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Maximum line length for the compliance check (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Count added/removed lines as set differences instead of an ordered diff
    #[arg(long)]
    pub unordered: bool,

    /// Exit with code 1 when any file does not comply with the standard
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct CountArgs {
    /// Files or directories to count
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extensions to count (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Maximum line length for the compliance check (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Exit with code 1 when any file does not comply with the standard
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Old version of the file
    pub old: PathBuf,

    /// New version of the file
    pub new: PathBuf,

    /// Length-change ratio at which a changed line counts as major (0.0-1.0]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct WrapArgs {
    /// File to rewrite in place
    pub file: PathBuf,

    /// Maximum line width (overrides config)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Print the wrapped lines instead of rewriting the file
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
