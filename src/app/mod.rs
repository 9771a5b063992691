//! Output rendering and end-of-run statistics used by the batch driver.

pub mod output;
pub mod statistics;

// Re-export public API
pub use output::write_result;
pub use statistics::print_error_statistics;
