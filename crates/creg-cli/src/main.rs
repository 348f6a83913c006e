//! Course registration validator CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use creg_app::{JsonSink, LogSink, SubmissionSink};
use creg_cli::cli::{Cli, Command};
use creg_cli::commands::{run_courses, run_register};
use creg_cli::logging::{LogConfig, init_logging};
use creg_cli::render::{notice_lines, print_registration};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Courses(args) => match run_courses(&args) {
            Ok(table) => {
                println!("{table}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Register(args) => {
            let sink: Box<dyn SubmissionSink> = if args.json {
                Box::new(JsonSink::new(io::stdout()))
            } else {
                Box::new(LogSink)
            };
            match run_register(&args, sink) {
                Ok(outcome) => {
                    // Keep stdout to the payload document.
                    if args.json {
                        for line in notice_lines(&outcome.state.notices) {
                            eprintln!("{line}");
                        }
                        outcome.exit_code()
                    } else if let Err(error) = print_registration(&outcome.state) {
                        eprintln!("error: failed to write output: {error}");
                        1
                    } else {
                        outcome.exit_code()
                    }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
    };
    std::process::exit(exit_code);
}

/// Logging configuration from CLI flags.
///
/// `--log-level` beats `-v`/`-q`, which beat `RUST_LOG`. ANSI follows
/// `--color`, and in auto mode only a terminal stderr gets colors.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), Into::into),
        use_env_filter: !explicit,
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
