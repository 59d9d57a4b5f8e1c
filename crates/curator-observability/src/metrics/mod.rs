//! Batch-level metrics.

mod scan_metrics;

pub use scan_metrics::ScanMetrics;
