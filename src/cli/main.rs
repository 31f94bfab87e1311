//! Command-line interface entry point for `gpacalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_calc::config::Config;
use gpa_calc::info;
use gpa_calc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let outcome = match args.command {
        Command::Config { subcommand } => {
            // Edits persist, so start from the file rather than the overridden copy
            let mut stored = Config::load();
            commands::config::run(subcommand, &mut stored, &defaults)
        }
        Command::Calc { source } => commands::calc::run(&source, &config, verbose),
        Command::Interactive { allow_zero_credits } => commands::interactive::run(
            commands::effective_policy(allow_zero_credits, config.credit_policy()),
        ),
        Command::Report {
            source,
            format,
            output,
        } => commands::report::run(&source, &format, output.as_deref(), &config).map(|path| {
            println!("✓ Report generated: {}", path.display());
        }),
    };

    if let Err(message) = outcome {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
