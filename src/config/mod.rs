//! Application configuration and constants.
//!
//! This module provides:
//! - Scanner character classes and limits
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, FailOn, LogFormat, LogLevel, Opt, OutputFormat};
