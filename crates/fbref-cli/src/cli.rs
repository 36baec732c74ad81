//! CLI argument definitions for the match-report harvester.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fbref_model::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fbref-harvest",
    version,
    about = "Harvest per-player statistics from football match report pages",
    long_about = "Harvest per-player statistics from football match report pages.\n\n\
                  Every page contributes seven statistics tables per team. Rows are tagged\n\
                  with team, result, match time and matchup, team summary rows are dropped,\n\
                  and all matches are written to one workbook sheet (or CSV file) per category."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch match reports and export the per-category datasets.
    Run(RunArgs),

    /// Print the category to table-slot layout in effect.
    Layout(LayoutArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Match report URLs or local HTML files, processed in order.
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<String>,

    /// File with one source per line (blank lines and `#` comments ignored).
    #[arg(long = "sources-file", value_name = "PATH")]
    pub sources_file: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output workbook (xlsx) or directory (csv). Default: data.xlsx / data.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Minimum delay between fetches, in seconds.
    #[arg(long = "min-delay", value_name = "SECS")]
    pub min_delay: Option<u64>,

    /// Maximum delay between fetches, in seconds (0 disables pacing).
    #[arg(long = "max-delay", value_name = "SECS")]
    pub max_delay: Option<u64>,

    /// Keep fetched pages in this directory and reuse them on later runs.
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Serve pages from the cache only; a missing page is an error.
    #[arg(long = "offline", requires = "cache_dir")]
    pub offline: bool,

    /// Record failing documents and continue instead of aborting the run.
    ///
    /// By default the first failing document aborts the run and nothing is
    /// written. With this flag the document is left out of every dataset
    /// and listed in the run summary.
    #[arg(long = "skip-failed")]
    pub skip_failed: bool,
}

#[derive(Parser)]
pub struct LayoutArgs {
    /// TOML configuration file whose `[layout]` table should be shown.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xlsx,
    Csv,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Xlsx => OutputFormat::Xlsx,
            OutputFormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
