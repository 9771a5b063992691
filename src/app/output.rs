//! Rendering of parse results.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error_handling::{HttpError, ParseError};
use crate::parse::ConfigMap;

/// One JSON output record.
#[derive(Serialize)]
struct LineRecord<'a> {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<BTreeMap<&'a str, &'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<HttpError>,
}

/// Escapes `\`, tab, CR and LF so a Plain row always has three columns.
fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn sorted(config: &ConfigMap) -> BTreeMap<&str, &str> {
    config
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

/// Writes the outcome of parsing one input line.
///
/// `Plain` writes one `line<TAB>key<TAB>value` row per pair, with `\`, tab,
/// CR and LF inside keys and values written as `\\`, `\t`, `\r` and `\n`.
/// Nothing is written for a failure (failures are logged by the caller).
/// `Json` writes exactly one object per line, carrying either `config` or a
/// bad-request `error`.
pub fn write_result<W: Write>(
    writer: &mut W,
    format: &OutputFormat,
    line_number: usize,
    result: &Result<ConfigMap, ParseError>,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            if let Ok(config) = result {
                for (key, value) in sorted(config) {
                    writeln!(
                        writer,
                        "{}\t{}\t{}",
                        line_number,
                        escape_field(key),
                        escape_field(value)
                    )
                    .context("Failed to write output row")?;
                }
            }
        }
        OutputFormat::Json => {
            let record = match result {
                Ok(config) => LineRecord {
                    line: line_number,
                    config: Some(sorted(config)),
                    error: None,
                },
                Err(e) => LineRecord {
                    line: line_number,
                    config: None,
                    error: Some(HttpError::from(e)),
                },
            };
            serde_json::to_writer(&mut *writer, &record)
                .context("Failed to serialize output record")?;
            writeln!(writer).context("Failed to write output record")?;
        }
    }
    Ok(())
}
