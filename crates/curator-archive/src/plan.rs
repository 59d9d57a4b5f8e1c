//! Move plan: the MOVE records of a report, resolved to target groups.

use std::fmt;

use serde::Serialize;

use curator_classifier::MatcherTable;
use curator_core::{Action, Topic};

use crate::report::ReclassificationRecord;

/// Move `post_id` into the group for `topic`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub topic: Topic,
    /// Display name of the target group.
    pub group: String,
    pub post_id: String,
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.post_id, self.group, self.topic)
    }
}

/// A MOVE record that cannot be planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    pub post_id: String,
    pub topic: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovePlan {
    pub requests: Vec<MoveRequest>,
    pub rejected: Vec<RejectedRecord>,
}

impl MovePlan {
    /// KEEP and EVAL records are ignored.
    pub fn from_records(records: &[ReclassificationRecord], table: &MatcherTable) -> Self {
        let mut plan = Self::default();
        for record in records.iter().filter(|r| r.action == Action::Move) {
            let Some(top) = record.top() else {
                plan.rejected.push(RejectedRecord {
                    post_id: record.post_id.clone(),
                    topic: String::new(),
                    reason: "record has no ranking".to_string(),
                });
                continue;
            };
            match table.name_of(&top.topic) {
                Some(group) => plan.requests.push(MoveRequest {
                    topic: top.topic.clone(),
                    group: group.to_string(),
                    post_id: record.post_id.clone(),
                }),
                None => plan.rejected.push(RejectedRecord {
                    post_id: record.post_id.clone(),
                    topic: top.topic.to_string(),
                    reason: format!("topic '{}' is not in the configured topic set", top.topic),
                }),
            }
        }
        plan
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
