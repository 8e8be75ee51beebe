//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pgtd_cli::commands::ValidateRequest;
use pgtd_model::{RuleVariant, parse_compact_date};

#[derive(Parser)]
#[command(
    name = "pgtd",
    version,
    about = "Programmatic trading report validator for Northbound (SH/SZ) account filings",
    long_about = "Validate programmatic-trading account information reports \
                  (SH_PGTDRPT_<FIRM_ID>_<YYYYMMDD>.xlsx or SZ_PGTDRPT_<FIRM_ID>_<YYYYMMDD>.xlsx).\n\n\
                  Exits with status 0 when the report has no errors and 1 otherwise."
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

    /// Allow account names and client codes in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a report workbook.
    Validate(ValidateArgs),

    /// List the report columns of an exchange variant.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the .xlsx report.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the result.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Also write all findings to a CSV file.
    #[arg(long = "findings-csv", value_name = "PATH")]
    pub findings_csv: Option<PathBuf>,

    /// Date used instead of today for the future-submission check (YYYYMMDD).
    #[arg(long = "reference-date", value_name = "YYYYMMDD", value_parser = parse_reference_date)]
    pub reference_date: Option<NaiveDate>,
}

impl ValidateArgs {
    pub fn to_request(&self) -> ValidateRequest {
        ValidateRequest {
            path: self.file.clone(),
            reference_date: self.reference_date,
            findings_csv: self.findings_csv.clone(),
        }
    }
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Exchange variant (SH or SZ).
    #[arg(long = "variant", default_value = "SH")]
    pub variant: RuleVariant,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Plain-text report.
    Text,
    /// Summary and findings tables.
    Table,
    /// JSON response document.
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

fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    parse_compact_date(value).ok_or_else(|| format!("invalid date '{value}', expected YYYYMMDD"))
}
