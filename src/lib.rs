//! config_string library: single-line `key=value` configuration parsing
//!
//! The core is [`parse_config`], which turns a string such as
//! `name="my app" port=8080` into a map, or rejects it with a [`ParseError`]
//! naming what was wrong. The rest of the crate runs that parser over files or
//! stdin, renders results, and translates failures into bad-request bodies.
//!
//! # Example
//!
//! ```
//! use config_string::{parse_config, ParseErrorKind};
//!
//! let config = parse_config("a=b c=\"d e\"").unwrap();
//! assert_eq!(config["c"], "d e");
//!
//! let err = parse_config("a=b c").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::UnbalancedPairs);
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod parse;
mod utils;

// Re-export public API
pub use config::{Config, ConfigValidationError, FailOn, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{HttpError, InitializationError, ParseError, ParseErrorKind, ParseStats};
pub use parse::{pair_tokens, parse_config, tokenize, transition, Action, ConfigMap, ScanState};
pub use run::{evaluate_exit_code, parse_lines, parse_single, run_parse, ParseReport};

// Internal run module (drives the parser over input lines)
mod run {
    use std::fs::File;
    use std::io::{self, BufRead, BufReader, Write};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info, warn};

    use crate::app::{print_error_statistics, write_result};
    use crate::config::{
        Config, FailOn, OutputFormat, COMMENT_PREFIX, EXIT_PARSE_FAILURES, EXIT_SUCCESS,
        STDIN_PATH,
    };
    use crate::error_handling::ParseStats;
    use crate::parse::parse_config;

    /// Results of a parsing run.
    #[derive(Debug)]
    pub struct ParseReport {
        /// Number of lines handed to the parser (blank and comment lines excluded)
        pub total_lines: usize,
        /// Number of lines that parsed successfully
        pub parsed: usize,
        /// Number of lines rejected by the parser
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Failure counts by kind
        pub stats: ParseStats,
    }

    /// Runs the parser over the input described by `config`.
    ///
    /// Uses `config.line` when set, parsed as one string with no line
    /// filtering; otherwise reads `config.file` line by line (`-` reads stdin).
    /// Results are written to `writer` in `config.output` format. A malformed
    /// line is counted and logged, never fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened or read, or if
    /// writing to `writer` fails.
    ///
    /// # Example
    ///
    /// ```
    /// use config_string::{run_parse, Config};
    ///
    /// let config = Config {
    ///     line: Some("a=b c=d".to_string()),
    ///     ..Default::default()
    /// };
    /// let mut out = Vec::new();
    /// let report = run_parse(&config, &mut out).unwrap();
    /// assert_eq!(report.parsed, 1);
    /// assert_eq!(String::from_utf8(out).unwrap(), "1\ta\tb\n1\tc\td\n");
    /// ```
    pub fn run_parse<W: Write>(config: &Config, writer: &mut W) -> Result<ParseReport> {
        if let Some(line) = &config.line {
            debug!("Parsing single configuration string");
            return parse_single(line, &config.output, writer);
        }

        if config.file.as_os_str() == STDIN_PATH {
            info!("Reading configuration lines from stdin");
            let stdin = io::stdin();
            return parse_lines(stdin.lock(), &config.output, writer);
        }

        let file = File::open(&config.file).with_context(|| {
            format!("Failed to open input file {}", config.file.display())
        })?;
        info!("Reading configuration lines from {}", config.file.display());
        parse_lines(BufReader::new(file), &config.output, writer)
    }

    /// Parses one configuration string exactly as given and reports it as line 1.
    ///
    /// Unlike [`parse_lines`], nothing is skipped or split: an empty string,
    /// a `#` prefix or an embedded newline all reach the parser unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn parse_single<W: Write>(
        input: &str,
        format: &OutputFormat,
        writer: &mut W,
    ) -> Result<ParseReport> {
        let start_time = Instant::now();
        let stats = ParseStats::new();

        process_line(1, input, format, &stats, writer)?;
        writer.flush().context("Failed to flush output")?;

        Ok(finish_report(start_time, 1, stats))
    }

    /// Parses every non-blank, non-comment line of `reader`.
    ///
    /// Lines are numbered from 1 over the physical input, so numbers in the
    /// output point back at the source line. Each line is parsed verbatim apart
    /// from its terminator; leading and trailing spaces are significant.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `reader` or writing to `writer` fails.
    pub fn parse_lines<R: BufRead, W: Write>(
        reader: R,
        format: &OutputFormat,
        writer: &mut W,
    ) -> Result<ParseReport> {
        let start_time = Instant::now();
        let stats = ParseStats::new();
        let mut total_lines = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.with_context(|| format!("Failed to read input line {line_number}"))?;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                debug!("Skipping line {line_number}");
                continue;
            }
            total_lines += 1;

            process_line(line_number, &line, format, &stats, writer)?;
        }

        writer.flush().context("Failed to flush output")?;

        Ok(finish_report(start_time, total_lines, stats))
    }

    /// Parses one input, records the outcome and writes it.
    fn process_line<W: Write>(
        line_number: usize,
        line: &str,
        format: &OutputFormat,
        stats: &ParseStats,
        writer: &mut W,
    ) -> Result<()> {
        let result = parse_config(line);
        match &result {
            Ok(config) => {
                stats.increment_parsed();
                debug!("Line {}: parsed {} pair(s)", line_number, config.len());
            }
            Err(e) => {
                stats.increment_error(e.kind());
                warn!("Line {line_number}: {e}");
            }
        }
        write_result(writer, format, line_number, &result)
    }

    fn finish_report(start_time: Instant, total_lines: usize, stats: ParseStats) -> ParseReport {
        let parsed = stats.parsed_count();
        let failed = stats.total_errors();
        info!(
            "Run statistics: total={}, parsed={}, failed={}",
            total_lines, parsed, failed
        );
        print_error_statistics(&stats);

        ParseReport {
            total_lines,
            parsed,
            failed,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
            stats,
        }
    }

    /// Maps a finished run to a process exit code under the given policy.
    pub fn evaluate_exit_code(fail_on: &FailOn, report: &ParseReport) -> i32 {
        match fail_on {
            FailOn::Never => EXIT_SUCCESS,
            FailOn::AnyFailure => {
                if report.failed > 0 {
                    EXIT_PARSE_FAILURES
                } else {
                    EXIT_SUCCESS
                }
            }
        }
    }
}
