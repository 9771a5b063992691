//! Error handling and parse statistics.
//!
//! This module provides:
//! - Error type definitions (`ParseError`, `InitializationError`)
//! - Failure categories (`ParseErrorKind`)
//! - Parse statistics tracking
//! - The bad-request body handed to HTTP callers

mod http;
mod stats;
mod types;

// Re-export public API
pub use http::HttpError;
pub use stats::ParseStats;
pub use types::{InitializationError, ParseError, ParseErrorKind};
