//! CLI argument definitions for the production report.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use his_ingest::DEFAULT_SAMPLE_ROWS;
use his_model::ALL;

#[derive(Parser)]
#[command(
    name = "his-report",
    version,
    about = "HIS production report - per-professional attendance summaries",
    long_about = "Load a consolidated HIS production export, filter it, and render\n\
                  the ranked per-professional summary, daily trend, and headline totals.\n\
                  A missing source falls back to a synthetic demo dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Filter, aggregate, and render the production report.
    Report(ReportArgs),

    /// Show the schema detected for a source file.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the consolidated production CSV export.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Year filter ("Todos" for all).
    #[arg(long, default_value = ALL)]
    pub year: String,

    /// Month filter by Spanish name, e.g. "Octubre" ("Todos" for all).
    #[arg(long, default_value = ALL)]
    pub month: String,

    /// Establishment (IPRESS) filter ("Todos" for all).
    #[arg(long, default_value = ALL)]
    pub establishment: String,

    /// Profession/specialty filter ("Todos" for all).
    #[arg(long, default_value = ALL)]
    pub profession: String,

    /// Professional name filter ("Todos" for all).
    #[arg(long, default_value = ALL)]
    pub professional: String,

    /// Ranking cutoff; clamped to [5, distinct professionals].
    /// Defaults to min(20, distinct professionals).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Include the per-day columns and TOTAL in the table.
    #[arg(long = "with-days")]
    pub with_days: bool,

    /// Write the full (non-truncated) summary as CSV.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Rows of the synthetic demo dataset used when the source is missing.
    #[arg(long = "demo-rows", value_name = "ROWS", default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub demo_rows: usize,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the production CSV export.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
