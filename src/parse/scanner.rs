//! Token scanner and key/value pairing.

use std::collections::HashMap;

use super::state::{transition, Action, ScanState};
use crate::error_handling::ParseError;
use crate::utils::sanitize_and_truncate_fragment;

/// Parsed configuration: key to value, later duplicates overwrite earlier ones.
pub type ConfigMap = HashMap<String, String>;

/// Splits `input` into tokens at spaces and `=` outside quoted spans.
///
/// Adjacent boundaries produce empty tokens. Input that yields no characters
/// to accumulate and no boundaries (`""`, `"''"`) produces no tokens at all.
///
/// # Errors
///
/// - `IllegalSeparatorInQuote` as soon as `=` is seen inside a quoted span
/// - `UnterminatedQuote` if the input ends inside a quoted span
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut state = ScanState::Normal;
    let mut buffer = String::new();
    let mut tokens = Vec::new();
    let mut quote_opened_at = 0;
    // Byte offset into `buffer` where the open quoted span starts
    let mut quote_start = 0;

    for (position, c) in input.chars().enumerate() {
        let (next, action) = transition(state, c);
        match action {
            Action::Append => buffer.push(c),
            Action::Emit => tokens.push(std::mem::take(&mut buffer)),
            Action::Discard => {
                if next == ScanState::InQuote {
                    quote_opened_at = position;
                    quote_start = buffer.len();
                }
            }
            Action::Fail => {
                return Err(ParseError::IllegalSeparatorInQuote {
                    position,
                    context: sanitize_and_truncate_fragment(&buffer[quote_start..]),
                });
            }
        }
        state = next;
    }

    if state == ScanState::InQuote {
        return Err(ParseError::UnterminatedQuote {
            opened_at: quote_opened_at,
        });
    }

    if !buffer.is_empty() || !tokens.is_empty() {
        tokens.push(buffer);
    }

    Ok(tokens)
}

/// Pairs tokens by parity: even index is a key, odd index its value.
///
/// # Errors
///
/// `UnbalancedPairs` when the token count is odd.
pub fn pair_tokens(mut tokens: Vec<String>) -> Result<ConfigMap, ParseError> {
    if tokens.len() % 2 != 0 {
        let token_count = tokens.len();
        let dangling_key = tokens.pop().unwrap_or_default();
        return Err(ParseError::UnbalancedPairs {
            token_count,
            dangling_key: sanitize_and_truncate_fragment(&dangling_key),
        });
    }

    let mut map = ConfigMap::with_capacity(tokens.len() / 2);
    let mut tokens = tokens.into_iter();
    while let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
        map.insert(key, value);
    }
    Ok(map)
}

/// Parses a single-line `key=value` configuration string.
///
/// Pairs are separated by spaces; keys and values by `=` (or a space, the two
/// are interchangeable). A value wrapped in `"` or `'` may contain spaces but
/// never `=`. A repeated key keeps its last value.
///
/// # Errors
///
/// Returns the first `ParseError` encountered; no partial map is returned.
///
/// # Examples
///
/// ```
/// use config_string::parse_config;
///
/// let config = parse_config("name=\"my app\" port=8080").unwrap();
/// assert_eq!(config["name"], "my app");
/// assert_eq!(config["port"], "8080");
///
/// assert!(parse_config("name=\"my app").is_err());
/// ```
pub fn parse_config(input: &str) -> Result<ConfigMap, ParseError> {
    let tokens = tokenize(input)?;
    pair_tokens(tokens)
}
