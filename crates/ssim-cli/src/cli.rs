//! CLI argument definitions for the SSIM converter.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ssim_model::{DEFAULT_CREATOR, DEFAULT_TIME_SHIFT_HOURS, UtcOffset};

#[derive(Parser)]
#[command(
    name = "ssim",
    version,
    about = "Convert hub schedule tables to SSIM flight leg datasets",
    long_about = "Convert a hub airport's seasonal schedule (one row per arrival/departure \
                  pair) into an IATA SSIM Chapter 7 dataset.\n\n\
                  Every line of the output is exactly 200 characters."
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
    /// Convert a schedule table into an SSIM dataset.
    Convert(ConvertArgs),

    /// List the airlines found in a schedule table.
    Airlines(AirlinesArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Schedule table (CSV) to convert.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Airline code to convert; repeat for several airlines.
    #[arg(long = "airline", short = 'a', value_name = "CODE", conflicts_with = "all")]
    pub airlines: Vec<String>,

    /// Convert every airline in the table (the default).
    #[arg(long = "all")]
    pub all: bool,

    /// Hub station code.
    #[arg(long = "hub", value_name = "CODE", default_value = "AMS")]
    pub hub: String,

    /// Hub UTC offset as +HHMM or -HHMM.
    #[arg(
        long = "hub-offset",
        value_name = "OFFSET",
        default_value = "+0100",
        allow_hyphen_values = true
    )]
    pub hub_offset: UtcOffset,

    /// Issue date as YYYY-MM-DD (default: today).
    #[arg(long = "issue-date", value_name = "DATE")]
    pub issue_date: Option<NaiveDate>,

    /// Creator reference written on carrier lines.
    #[arg(long = "creator", value_name = "TEXT", default_value = DEFAULT_CREATOR)]
    pub creator: String,

    /// Hours between hub time and the synthesized counterpart time (-23 to 23).
    #[arg(
        long = "time-shift",
        value_name = "HOURS",
        default_value_t = DEFAULT_TIME_SHIFT_HOURS,
        value_parser = clap::value_parser!(i64).range(-23..=23),
        allow_negative_numbers = true
    )]
    pub time_shift_hours: i64,

    /// Output file path (default: <OUTPUT_DIR>/<SCOPE>_<YYYYMMDD>_<HUB>.ssim).
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for the generated file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct AirlinesArgs {
    /// Schedule table (CSV) to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the airline list as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
