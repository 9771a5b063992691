//! Utilities for sanitizing text embedded in error messages.
//!
//! Input fragments quoted in a `ParseError` come straight from user input, so
//! control characters are removed and the fragment is capped in length before
//! it lands in a log line or an HTTP error body.

use crate::config::MAX_ERROR_CONTEXT_CHARS;

/// Removes control characters, keeping tab and all non-ASCII text.
///
/// # Arguments
///
/// * `fragment` - Text taken from the input
///
/// # Returns
///
/// The fragment with control characters (0x00-0x1F except tab, and 0x7F) removed.
pub fn sanitize_fragment(fragment: &str) -> String {
    fragment
        .chars()
        .filter(|c| {
            let code = *c as u32;
            (code >= 0x20 && code != 0x7F) // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
        })
        .collect()
}

/// Sanitizes a fragment and keeps at most `MAX_ERROR_CONTEXT_CHARS` characters
/// of it, appending `...` when anything was cut.
///
/// Truncation counts characters, never bytes, so multi-byte text is never split.
pub fn sanitize_and_truncate_fragment(fragment: &str) -> String {
    let sanitized = sanitize_fragment(fragment);

    if sanitized.chars().count() > MAX_ERROR_CONTEXT_CHARS {
        let mut truncated: String = sanitized.chars().take(MAX_ERROR_CONTEXT_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        sanitized
    }
}
