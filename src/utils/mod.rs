//! Shared helpers.

mod sanitize;

pub use sanitize::{sanitize_and_truncate_fragment, sanitize_fragment};
