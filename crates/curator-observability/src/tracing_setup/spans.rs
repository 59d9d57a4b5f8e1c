//! Span definitions per operation: single-post classification and batch scans.

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($post:expr, $current:expr) => {
        tracing::info_span!("curator.classification", post = %$post, current = %$current)
    };
}

/// Create a batch scan span.
#[macro_export]
macro_rules! batch_span {
    ($dir:expr, $post_count:expr) => {
        tracing::info_span!("curator.batch", dir = %$dir, post_count = $post_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFICATION: &str = "curator.classification";
    pub const BATCH: &str = "curator.batch";
}
