//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A configuration string that could not be turned into a map.
///
/// Positions are zero-based character (not byte) offsets into the input.
/// No partial map is ever produced alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `=` appeared while a quoted span was open.
    #[error("illegal separator '=' at position {position} inside quoted span (after \"{context}\")")]
    IllegalSeparatorInQuote {
        /// Character offset of the `=`
        position: usize,
        /// Quoted text accumulated before the `=`
        context: String,
    },

    /// Input ended with a quoted span still open.
    #[error("unterminated quoted span opened at position {opened_at}")]
    UnterminatedQuote {
        /// Character offset of the quote that opened the span
        opened_at: usize,
    },

    /// The scan produced an odd, non-zero number of tokens.
    #[error("unbalanced key/value pairs: {token_count} tokens, key \"{dangling_key}\" has no value")]
    UnbalancedPairs {
        /// Number of tokens produced by the scan
        token_count: usize,
        /// The final, unpaired token
        dangling_key: String,
    },
}

impl ParseError {
    /// The failure category, without the positional details.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::IllegalSeparatorInQuote { .. } => ParseErrorKind::IllegalSeparatorInQuote,
            ParseError::UnterminatedQuote { .. } => ParseErrorKind::UnterminatedQuote,
            ParseError::UnbalancedPairs { .. } => ParseErrorKind::UnbalancedPairs,
        }
    }
}

/// Categories of parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ParseErrorKind {
    /// `=` inside a quoted span
    IllegalSeparatorInQuote,
    /// Quoted span still open at end of input
    UnterminatedQuote,
    /// Odd, non-zero token count
    UnbalancedPairs,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ParseErrorKind {
    /// Human-readable label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::IllegalSeparatorInQuote => "Separator inside quoted span",
            ParseErrorKind::UnterminatedQuote => "Unterminated quoted span",
            ParseErrorKind::UnbalancedPairs => "Unbalanced key/value pairs",
        }
    }
}
