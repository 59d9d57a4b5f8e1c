use serde::{Deserialize, Serialize};

use super::Action;
use crate::topic::Topic;

/// One entry of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: Topic,
    pub score: u32,
}

/// Outcome of classifying one post.
///
/// `ranking` holds every topic of the table exactly once, descending by
/// score, ties in table order, with the keep-current override applied.
/// `ranking[0].topic == top` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub ranking: Vec<TopicScore>,
    pub top: Topic,
    pub current: Topic,
    pub action: Action,
}

impl ClassificationResult {
    /// Score of `topic`, or `None` if the topic was not ranked.
    pub fn score_of(&self, topic: &Topic) -> Option<u32> {
        self.ranking
            .iter()
            .find(|entry| &entry.topic == topic)
            .map(|entry| entry.score)
    }

    pub fn top_score(&self) -> u32 {
        self.ranking.first().map(|e| e.score).unwrap_or(0)
    }

    pub fn current_score(&self) -> u32 {
        self.score_of(&self.current).unwrap_or(0)
    }

    /// `topic score topic score ...` in ranking order.
    pub fn ranking_summary(&self) -> String {
        self.ranking
            .iter()
            .map(|e| format!("{} {}", e.topic, e.score))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Which part of the post a matcher fired on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Body,
}

impl MatchField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
        }
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence that a matcher contributed to a topic's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHit {
    pub topic: Topic,
    pub pattern: String,
    pub field: MatchField,
    /// First matched text in the field.
    pub matched: String,
    pub weight: u32,
}
