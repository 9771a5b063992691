//! Application initialization.
//!
//! Currently only the logger needs process-wide setup; the parser itself holds
//! no global state.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
