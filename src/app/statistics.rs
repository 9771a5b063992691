//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ParseErrorKind, ParseStats};

/// Logs the number of failures per kind, skipping kinds that never occurred.
pub fn print_error_statistics(stats: &ParseStats) {
    let total_errors = stats.total_errors();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for kind in ParseErrorKind::iter() {
            let count = stats.get_error_count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_empty() {
        // Should not panic with no errors
        print_error_statistics(&ParseStats::new());
    }

    #[test]
    fn test_print_error_statistics_with_errors() {
        let stats = ParseStats::new();
        stats.increment_error(ParseErrorKind::UnbalancedPairs);
        stats.increment_error(ParseErrorKind::IllegalSeparatorInQuote);
        print_error_statistics(&stats);
        assert_eq!(stats.total_errors(), 2);
    }
}
