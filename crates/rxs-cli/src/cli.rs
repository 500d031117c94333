//! CLI argument definitions for the drug spending extractor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rxs_model::DEFAULT_OUTPUT_DIR;

#[derive(Parser)]
#[command(
    name = "rx-scoreboard",
    version,
    about = "Prepare Medicare drug spending JSON extracts",
    long_about = "Extract Medicare Part D and Part B drug spending for one reporting year,\n\
                  plus the national retail prescription drug expenditure series, as JSON."
)]
pub struct Cli {
    /// Path to the Medicare Part D by drug workbook.
    #[arg(long = "partd", value_name = "PATH")]
    pub partd: PathBuf,

    /// Path to the Medicare Part B by drug workbook.
    #[arg(long = "partb", value_name = "PATH")]
    pub partb: PathBuf,

    /// Path to the NHE Table 01 workbook.
    #[arg(long = "nhe", value_name = "PATH")]
    pub nhe: PathBuf,

    /// Output directory for the JSON files.
    #[arg(long = "outdir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub outdir: PathBuf,

    /// Four-digit report year to extract (default: latest year in the workbooks).
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<i32>,

    /// Run every extraction step without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
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
