//! Index metrics tracking.
//!
//! Counters for what happens to added items and how many searches ran, plus a
//! small timer for measuring operations. Everything is also reported through
//! `tracing` so callers that only install a subscriber still see activity.

use crate::search::AddOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for an index. Clones share the same counters.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    items_indexed: Arc<AtomicU64>,
    duplicates_skipped: Arc<AtomicU64>,
    empty_labels_skipped: Arc<AtomicU64>,
    search_queries_total: Arc<AtomicU64>,
    search_results_total: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSummary {
    pub items_indexed: u64,
    pub duplicates_skipped: u64,
    pub empty_labels_skipped: u64,
    pub search_queries_total: u64,
    pub search_results_total: u64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            items_indexed: Arc::new(AtomicU64::new(0)),
            duplicates_skipped: Arc::new(AtomicU64::new(0)),
            empty_labels_skipped: Arc::new(AtomicU64::new(0)),
            search_queries_total: Arc::new(AtomicU64::new(0)),
            search_results_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track the outcome of an add.
    pub fn track_add(&self, outcome: AddOutcome) {
        match outcome {
            AddOutcome::Indexed(_) => {
                self.items_indexed.fetch_add(1, Ordering::Relaxed);
            }
            AddOutcome::Duplicate => {
                self.duplicates_skipped.fetch_add(1, Ordering::Relaxed);
            }
            AddOutcome::NoKeys => {
                self.empty_labels_skipped.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Track a search query.
    pub fn track_search(&self, duration_ms: u128, result_count: usize) {
        self.search_queries_total.fetch_add(1, Ordering::Relaxed);
        self.search_results_total
            .fetch_add(result_count as u64, Ordering::Relaxed);

        tracing::debug!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Search query completed"
        );
    }

    pub fn items_indexed(&self) -> u64 {
        self.items_indexed.load(Ordering::Relaxed)
    }

    pub fn duplicates_skipped(&self) -> u64 {
        self.duplicates_skipped.load(Ordering::Relaxed)
    }

    pub fn empty_labels_skipped(&self) -> u64 {
        self.empty_labels_skipped.load(Ordering::Relaxed)
    }

    pub fn search_queries_total(&self) -> u64 {
        self.search_queries_total.load(Ordering::Relaxed)
    }

    /// Average number of items returned per search (0.0 with no searches).
    pub fn average_results(&self) -> f64 {
        let queries = self.search_queries_total() as f64;

        if queries == 0.0 {
            0.0
        } else {
            self.search_results_total.load(Ordering::Relaxed) as f64 / queries
        }
    }

    /// Snapshot all counters.
    pub fn snapshot(&self) -> MetricsSummary {
        MetricsSummary {
            items_indexed: self.items_indexed(),
            duplicates_skipped: self.duplicates_skipped(),
            empty_labels_skipped: self.empty_labels_skipped(),
            search_queries_total: self.search_queries_total(),
            search_results_total: self.search_results_total.load(Ordering::Relaxed),
        }
    }

    /// Human readable summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Items Indexed: {}\n\
             Duplicates Skipped: {}\n\
             Empty Labels Skipped: {}\n\
             Search Queries: {}\n\
             Average Results: {:.2}",
            self.items_indexed(),
            self.duplicates_skipped(),
            self.empty_labels_skipped(),
            self.search_queries_total(),
            self.average_results(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_tracker_creation() {
        let tracker = MetricsTracker::new();
        assert_eq!(tracker.snapshot(), MetricsSummary::default());
        assert_eq!(tracker.average_results(), 0.0);
    }

    #[test]
    fn test_track_add() {
        let tracker = MetricsTracker::new();

        tracker.track_add(AddOutcome::Indexed(0));
        tracker.track_add(AddOutcome::Indexed(1));
        tracker.track_add(AddOutcome::Duplicate);
        tracker.track_add(AddOutcome::NoKeys);

        assert_eq!(tracker.items_indexed(), 2);
        assert_eq!(tracker.duplicates_skipped(), 1);
        assert_eq!(tracker.empty_labels_skipped(), 1);
    }

    #[test]
    fn test_track_search() {
        let tracker = MetricsTracker::new();

        tracker.track_search(3, 4);
        tracker.track_search(1, 1);

        assert_eq!(tracker.search_queries_total(), 2);
        assert!((tracker.average_results() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clones_share_counters() {
        let tracker = MetricsTracker::new();
        let clone = tracker.clone();

        clone.track_add(AddOutcome::Indexed(0));
        assert_eq!(tracker.items_indexed(), 1);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(10));
        let duration = timer.finish();
        assert!(duration >= 10);
    }

    #[test]
    fn test_summary() {
        let tracker = MetricsTracker::new();
        tracker.track_add(AddOutcome::Indexed(0));
        tracker.track_search(1, 1);

        let summary = tracker.summary();
        assert!(summary.contains("Items Indexed: 1"));
        assert!(summary.contains("Search Queries: 1"));
    }
}
