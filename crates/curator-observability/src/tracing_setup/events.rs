//! Structured log events for classification and batch runs.
//!
//! Each function emits a `tracing` event with structured fields.

use curator_core::{Action, MatchField};

/// Log a classified post.
pub fn post_classified(post: &str, current: &str, top: &str, action: Action, top_score: u32) {
    tracing::info!(
        event = "post_classified",
        post = %post,
        current = %current,
        top = %top,
        action = %action,
        top_score = top_score,
        "post classified"
    );
}

/// Log one matcher that fired (debug level; noisy on large batches).
pub fn matcher_hit(post: &str, topic: &str, pattern: &str, field: MatchField, weight: u32) {
    tracing::debug!(
        event = "matcher_hit",
        post = %post,
        topic = %topic,
        pattern = %pattern,
        field = %field,
        weight = weight,
        "matcher hit"
    );
}

/// Log a post that could not be classified.
pub fn post_skipped(post: &str, error_code: &str, reason: &str) {
    tracing::warn!(
        event = "post_skipped",
        post = %post,
        error_code = %error_code,
        reason = %reason,
        "post skipped"
    );
}

/// Log the end of a batch run.
pub fn batch_completed(classified: usize, skipped: usize, moves: usize, evals: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "batch_completed",
        classified = classified,
        skipped = skipped,
        moves = moves,
        evals = evals,
        elapsed_ms = elapsed_ms,
        "batch completed"
    );
}
