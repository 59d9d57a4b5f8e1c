//! # curator-observability
//!
//! Tracing subscriber setup driven by `CURATOR_LOG`, span macros for
//! classification and batch runs, structured log events, and batch metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::ScanMetrics;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
