//! Parse statistics tracking.
//!
//! Thread-safe counters of parsed lines and failures by kind.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ParseErrorKind;

/// Thread-safe parse statistics tracker.
///
/// Every `ParseErrorKind` is initialized to zero on creation, so the struct can
/// be shared across threads with `Arc` and updated without locking.
#[derive(Debug)]
pub struct ParseStats {
    parsed: AtomicUsize,
    errors: HashMap<ParseErrorKind, AtomicUsize>,
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in ParseErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }

        ParseStats {
            parsed: AtomicUsize::new(0),
            errors,
        }
    }

    /// Records a successfully parsed line.
    pub fn increment_parsed(&self) {
        self.parsed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed line.
    pub fn increment_error(&self, kind: ParseErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ParseStats initialization.",
                kind
            );
        }
    }

    /// Number of lines parsed successfully.
    pub fn parsed_count(&self) -> usize {
        self.parsed.load(Ordering::SeqCst)
    }

    /// Returns 0 for a kind that is not in the map.
    pub fn get_error_count(&self, kind: ParseErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Failures across all kinds.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_parse_stats_initialization() {
        let stats = ParseStats::new();
        assert_eq!(stats.parsed_count(), 0);
        assert_eq!(stats.total_errors(), 0);
        for kind in ParseErrorKind::iter() {
            assert_eq!(stats.get_error_count(kind), 0);
        }
    }

    #[test]
    fn test_parse_stats_counts_by_kind() {
        let stats = ParseStats::new();
        stats.increment_error(ParseErrorKind::UnbalancedPairs);
        stats.increment_error(ParseErrorKind::UnbalancedPairs);
        stats.increment_error(ParseErrorKind::UnterminatedQuote);
        stats.increment_parsed();

        assert_eq!(stats.get_error_count(ParseErrorKind::UnbalancedPairs), 2);
        assert_eq!(stats.get_error_count(ParseErrorKind::UnterminatedQuote), 1);
        assert_eq!(
            stats.get_error_count(ParseErrorKind::IllegalSeparatorInQuote),
            0
        );
        assert_eq!(stats.total_errors(), 3);
        assert_eq!(stats.parsed_count(), 1);
    }

    #[test]
    fn test_parse_stats_shared_across_threads() {
        let stats = Arc::new(ParseStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_parsed();
                        stats.increment_error(ParseErrorKind::IllegalSeparatorInQuote);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.parsed_count(), 800);
        assert_eq!(stats.total_errors(), 800);
    }
}
