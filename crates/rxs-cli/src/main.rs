//! Medicare drug spending extractor CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use rxs_cli::logging::{LogConfig, LogFormat, init_logging};
use rxs_cli::pipeline::{RunConfig, run, summary_lines};
use rxs_model::ExtractOptions;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("ERROR: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = RunConfig {
        partd: cli.partd,
        partb: cli.partb,
        nhe: cli.nhe,
        output_dir: cli.outdir,
        year: cli.year,
        dry_run: cli.dry_run,
        options: ExtractOptions::default(),
    };
    let exit_code = match run(&config) {
        Ok(result) => {
            for line in summary_lines(&result) {
                println!("{line}");
            }
            0
        }
        Err(error) => {
            eprintln!("ERROR: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_timestamps = cli.log_timestamps;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
