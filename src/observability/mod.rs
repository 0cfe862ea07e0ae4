//! Observability for the index: metrics counters and operation timing.
//!
//! Logging goes through `tracing`; the library never installs a subscriber.

pub mod metrics;

pub use metrics::{MetricsSummary, MetricsTracker, Timer};
