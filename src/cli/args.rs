//! CLI argument definitions for `gpacalc`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_calc::config::ConfigOverrides;
use gpa_calc::logger::Level;
use gpa_calc::CreditPolicy;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// CLI credit policy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CreditPolicyArg {
    /// Credits must be greater than zero
    Positive,
    /// Zero credits are accepted
    NonNegative,
}

impl From<CreditPolicyArg> for CreditPolicy {
    fn from(arg: CreditPolicyArg) -> Self {
        match arg {
            CreditPolicyArg::Positive => Self::Positive,
            CreditPolicyArg::NonNegative => Self::NonNegative,
        }
    }
}

/// Where the course entries come from
#[derive(Debug, Clone, Args)]
pub struct CourseSource {
    /// Courses as GRADE:CREDITS pairs (e.g. `O:4 A+:3 B:4`)
    #[arg(value_name = "GRADE:CREDITS")]
    pub courses: Vec<String>,

    /// Read courses from a CSV (`grade,credits`) or TOML (`[[course]]`) file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Accept zero-credit courses for this run
    #[arg(long)]
    pub allow_zero_credits: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `credit_policy`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate the CGPA of a list of courses.
    Calc {
        #[command(flatten)]
        source: CourseSource,
    },
    /// Enter courses one by one at the prompt, then calculate.
    Interactive {
        /// Accept zero-credit courses for this run
        #[arg(long)]
        allow_zero_credits: bool,
    },
    /// Write the courses and their CGPA as an HTML or Markdown report.
    Report {
        #[command(flatten)]
        source: CourseSource,

        /// Report format: html or markdown (md)
        #[arg(long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (optional; defaults to the config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpacalc",
    about = "Credit-weighted CGPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config credit policy
    #[arg(long = "config-credit-policy", value_enum)]
    pub config_credit_policy: Option<CreditPolicyArg>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            credit_policy: self
                .config_credit_policy
                .map(|policy| CreditPolicy::from(policy).to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_credit_policy: None,
            config_reports_dir: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.credit_policy.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/test.log")),
            config_verbose: Some(true),
            config_credit_policy: Some(CreditPolicyArg::NonNegative),
            reports_dir: Some(PathBuf::from("/output")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.credit_policy, Some("non-negative".to_string()));
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_reports_dir: Some(PathBuf::from("/long/out")),
            reports_dir: Some(PathBuf::from("/short/out")),
            ..bare_cli()
        };
        assert_eq!(
            cli.to_config_overrides().reports_dir,
            Some("/short/out".to_string())
        );

        let long_only = Cli {
            config_reports_dir: Some(PathBuf::from("/long/out")),
            ..bare_cli()
        };
        assert_eq!(
            long_only.to_config_overrides().reports_dir,
            Some("/long/out".to_string())
        );
    }

    #[test]
    fn test_parse_calc_command() {
        let cli = Cli::try_parse_from(["gpacalc", "calc", "O:4", "B:4", "--allow-zero-credits"])
            .unwrap();
        match cli.command {
            Command::Calc { source } => {
                assert_eq!(source.courses, vec!["O:4", "B:4"]);
                assert!(source.allow_zero_credits);
                assert!(source.file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_command_defaults() {
        let cli = Cli::try_parse_from(["gpacalc", "report", "-f", "grades.csv"]).unwrap();
        match cli.command {
            Command::Report {
                source,
                format,
                output,
            } => {
                assert_eq!(source.file, Some(PathBuf::from("grades.csv")));
                assert_eq!(format, "html");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
