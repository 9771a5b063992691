//! Tests for CLI option parsing.

use clap::Parser;
use config_string::config::Opt;
use config_string::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_cli_defaults() {
    let opt = Opt::try_parse_from(["config_string"]).expect("Should parse with no arguments");
    assert_eq!(opt.file, PathBuf::from("-"));
    assert!(opt.line.is_none());
    assert_eq!(opt.log_level, LogLevel::Info);
    assert_eq!(opt.log_format, LogFormat::Plain);
    assert_eq!(opt.output, OutputFormat::Plain);
    assert_eq!(opt.fail_on, FailOn::Never);
}

#[test]
fn test_cli_file_argument() {
    let opt = Opt::try_parse_from(["config_string", "configs.txt"]).unwrap();
    assert_eq!(opt.file, PathBuf::from("configs.txt"));
}

#[test]
fn test_cli_line_with_spaces() {
    let opt =
        Opt::try_parse_from(["config_string", "--line", "name=\"my app\" port=8080"]).unwrap();
    assert_eq!(opt.line.as_deref(), Some("name=\"my app\" port=8080"));
}

#[test]
fn test_cli_all_options() {
    let opt = Opt::try_parse_from([
        "config_string",
        "in.txt",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--output",
        "json",
        "--fail-on",
        "any-failure",
    ])
    .unwrap();

    let config = Config::from(opt);
    assert_eq!(config.file, PathBuf::from("in.txt"));
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.fail_on, FailOn::AnyFailure);
}

#[test]
fn test_cli_rejects_unknown_output_format() {
    let result = Opt::try_parse_from(["config_string", "--output", "yaml"]);
    assert!(result.is_err(), "Unknown output format should be rejected");
}

#[test]
fn test_cli_rejects_unknown_fail_on_policy() {
    let result = Opt::try_parse_from(["config_string", "--fail-on", "sometimes"]);
    assert!(result.is_err());
}
