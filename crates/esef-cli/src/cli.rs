//! CLI argument definitions for the ESEF compliance checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "esef-check",
    version,
    about = "ESEF compliance checker - Validate an XBRL filing model against ESEF rules",
    long_about = "Validate a filing model against the ESEF Reporting Manual rules.\n\n\
                  Checks linkbase file names, taxonomy references, mandatory tags,\n\
                  dimensional arcroles and embedded resources for the 2020 and 2022\n\
                  reporting frameworks."
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
    /// Validate a filing model and report every violation.
    Validate(ValidateArgs),

    /// List the rule tables of a reporting version.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Filing model serialized as JSON.
    #[arg(value_name = "FILING_JSON")]
    pub filing: PathBuf,

    /// Reporting-framework version ("2020" or "2022").
    #[arg(long = "version", value_name = "VERSION")]
    pub version: String,

    /// TOML file with rule overrides.
    #[arg(long = "rules", value_name = "TOML")]
    pub rules: Option<PathBuf>,

    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Reporting-framework version; lists every version when omitted.
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// TOML file with rule overrides.
    #[arg(long = "rules", value_name = "TOML")]
    pub rules: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
