//! Outcome counts and timing for one batch scan.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curator_core::Action;

/// Counters collected while a batch runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanMetrics {
    pub started_at: DateTime<Utc>,
    /// Classified posts per action, keyed by `KEEP` / `MOVE` / `EVAL`.
    pub actions: BTreeMap<String, usize>,
    /// Skipped posts per error code.
    pub skipped: BTreeMap<String, usize>,
    pub elapsed_ms: u64,
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            actions: Action::ALL
                .iter()
                .map(|a| (a.as_str().to_string(), 0))
                .collect(),
            skipped: BTreeMap::new(),
            elapsed_ms: 0,
        }
    }

    pub fn record_action(&mut self, action: Action) {
        *self.actions.entry(action.as_str().to_string()).or_default() += 1;
    }

    pub fn record_skipped(&mut self, error_code: &str) {
        *self.skipped.entry(error_code.to_string()).or_default() += 1;
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    }

    pub fn count(&self, action: Action) -> usize {
        self.actions.get(action.as_str()).copied().unwrap_or(0)
    }

    pub fn classified(&self) -> usize {
        self.actions.values().sum()
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
