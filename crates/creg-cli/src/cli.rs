//! CLI argument definitions for the course registration validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use creg_app::SelectionMode;
use creg_model::{BelowMinimumSeverity, OverflowPolicy};
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "creg",
    version,
    about = "Course registration credit validator",
    long_about = "Select courses from a catalog and check the total credit hours\n\
                  against the student's minimum and maximum before registering."
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
    /// List the courses available in a catalog.
    Courses(CoursesArgs),

    /// Build a registration and check it against the credit band.
    Register(RegisterArgs),
}

#[derive(Parser)]
pub struct CoursesArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Only show courses whose code, name or lecturer contains this text.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct RegisterArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Toggle a course by code (repeatable, applied in order).
    #[arg(long = "select", value_name = "CODE")]
    pub select: Vec<String>,

    /// Add a course by code (repeatable, applied after --select).
    #[arg(long = "add", value_name = "CODE")]
    pub add: Vec<String>,

    /// Remove the pending course at this zero-based position (repeatable, applied last).
    #[arg(long = "remove", value_name = "INDEX")]
    pub remove: Vec<usize>,

    /// How the registration is built up.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// What happens when a selection would exceed the maximum.
    #[arg(long = "policy", value_enum)]
    pub policy: Option<PolicyArg>,

    /// How a total below the minimum is classified.
    #[arg(long = "below-minimum", value_enum)]
    pub below_minimum: Option<SeverityArg>,

    /// Override the minimum credit hours.
    #[arg(long = "min", value_name = "N")]
    pub min: Option<u32>,

    /// Override the maximum credit hours.
    #[arg(long = "max", value_name = "N")]
    pub max: Option<u32>,

    /// Settings TOML file.
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Submit the registration once the selection is built.
    #[arg(long = "submit")]
    pub submit: bool,

    /// Write the submitted payload as JSON to stdout instead of logging it.
    #[arg(long = "json", requires = "submit")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Toggle,
    List,
}

impl From<ModeArg> for SelectionMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Toggle => SelectionMode::Toggle,
            ModeArg::List => SelectionMode::List,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Refuse the selection and keep the previous one.
    Block,
    /// Accept the selection and report an error state.
    Flag,
}

impl From<PolicyArg> for OverflowPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Block => OverflowPolicy::Block,
            PolicyArg::Flag => OverflowPolicy::Flag,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SeverityArg {
    Warning,
    Error,
}

impl From<SeverityArg> for BelowMinimumSeverity {
    fn from(value: SeverityArg) -> Self {
        match value {
            SeverityArg::Warning => BelowMinimumSeverity::Warning,
            SeverityArg::Error => BelowMinimumSeverity::Error,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
