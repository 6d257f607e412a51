pub mod log_observer;
pub mod metrics;

// Re-export main types
pub use log_observer::LogObserver;
pub use metrics::{MetricsCollector, MetricsSnapshot, MetricsSummary};
