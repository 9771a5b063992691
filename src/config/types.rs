//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::STDIN_PATH;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the parse results written to the output stream.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `line<TAB>key<TAB>value` row per pair, keys sorted, tabs and newlines escaped
    Plain,
    /// One JSON object per input line
    Json,
}

/// Exit code policy for the CLI.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the input has been read
    Never,
    /// Exit non-zero if any line failed to parse
    AnyFailure,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use config_string::Config;
///
/// let config = Config {
///     line: Some("a=b c=d".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read configuration lines from (`-` for stdin)
    pub file: PathBuf,

    /// Single configuration string; when set, `file` is not read
    pub line: Option<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Output format for parse results
    pub output: OutputFormat,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(STDIN_PATH),
            line: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}

/// A configuration field holding an unusable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected instead
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks that the configuration describes a readable input.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.line.is_none() && self.file.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "file",
                message: format!(
                    "must be a path or '{}' for stdin when no --line is given",
                    STDIN_PATH
                ),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Parse every line of a file
/// config_string configs.txt
///
/// # Parse a single string and emit JSON
/// config_string --line 'name="my app" port=8080' --output json
///
/// # Read from stdin and exit 2 if any line is malformed
/// cat configs.txt | config_string - --fail-on any-failure
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "config_string",
    about = "Parses single-line key=value configuration strings."
)]
pub struct Opt {
    /// File to read (`-` for stdin)
    #[arg(value_parser, default_value = STDIN_PATH)]
    pub file: PathBuf,

    /// Parse this string instead of reading a file
    #[arg(long)]
    pub line: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Exit code policy: never|any-failure
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            line: opt.line,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output: opt.output,
            fail_on: opt.fail_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config_reads_stdin() {
        let config = Config::default();
        assert_eq!(config.file, PathBuf::from("-"));
        assert!(config.line.is_none());
        assert_eq!(config.output, OutputFormat::Plain);
        assert_eq!(config.fail_on, FailOn::Never);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_file_without_line() {
        let config = Config {
            file: PathBuf::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "file");
        assert!(err.message.contains("stdin"));
        assert!(err.to_string().starts_with("invalid file:"));
    }

    #[test]
    fn test_validate_accepts_empty_file_with_line() {
        let config = Config {
            file: PathBuf::new(),
            line: Some("a=b".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_opt_into_config() {
        let opt = Opt::try_parse_from([
            "config_string",
            "input.txt",
            "--output",
            "json",
            "--fail-on",
            "any-failure",
        ])
        .unwrap();
        let config = Config::from(opt);
        assert_eq!(config.file, PathBuf::from("input.txt"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.fail_on, FailOn::AnyFailure);
    }
}
