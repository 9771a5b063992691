//! Tests for exit code policies (--fail-on flag)

use config_string::{evaluate_exit_code, parse_lines, FailOn, OutputFormat, ParseReport};

fn report_for(input: &str) -> ParseReport {
    let mut out = Vec::new();
    parse_lines(input.as_bytes(), &OutputFormat::Plain, &mut out).expect("In-memory run failed")
}

#[test]
fn test_fail_on_never_always_returns_zero() {
    let report = report_for("a=b\nbroken\nc=\"d\n");
    assert_eq!(report.failed, 2);
    assert_eq!(evaluate_exit_code(&FailOn::Never, &report), 0);
}

#[test]
fn test_fail_on_any_failure_with_failures() {
    let report = report_for("a=b\nbroken\n");
    assert_eq!(evaluate_exit_code(&FailOn::AnyFailure, &report), 2);
}

#[test]
fn test_fail_on_any_failure_without_failures() {
    let report = report_for("a=b\nc=d e=f\n");
    assert_eq!(report.failed, 0);
    assert_eq!(evaluate_exit_code(&FailOn::AnyFailure, &report), 0);
}

#[test]
fn test_fail_on_any_failure_empty_input() {
    let report = report_for("");
    assert_eq!(report.total_lines, 0);
    assert_eq!(evaluate_exit_code(&FailOn::AnyFailure, &report), 0);
}
