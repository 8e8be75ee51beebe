//! Programmatic trading report validator CLI.

use clap::{ColorChoice, Parser};
use pgtd_cli::commands::run_validate;
use pgtd_cli::logging::{LogConfig, LogFormat, init_logging};
use pgtd_report::{ValidationResponse, render_run};
use pgtd_validate::ValidationRun;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use crate::summary::{print_fields, print_run_tables};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => match run_validate(&args.to_request()) {
            Ok(run) => match print_run(&run, args.format) {
                Ok(()) => {
                    if run.is_valid() {
                        0
                    } else {
                        1
                    }
                }
                Err(error) => {
                    eprintln!("error: {error}");
                    1
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Fields(args) => {
            print_fields(args.variant);
            0
        }
    };
    std::process::exit(exit_code);
}

fn print_run(run: &ValidationRun, format: OutputFormatArg) -> serde_json::Result<()> {
    match format {
        OutputFormatArg::Text => println!("{}", render_run(run)),
        OutputFormatArg::Table => print_run_tables(run),
        OutputFormatArg::Json => println!("{}", ValidationResponse::from_run(run).to_json_pretty()?),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flags_map_onto_config() {
        let cli = Cli::parse_from([
            "pgtd",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-file",
            "logs/pgtd.log",
            "--log-data",
            "fields",
        ]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("logs/pgtd.log")));
        assert!(config.log_data);
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn defaults_defer_to_environment_filter() {
        let cli = Cli::parse_from(["pgtd", "fields"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.use_env_filter);
        assert!(!config.log_data);
    }
}
