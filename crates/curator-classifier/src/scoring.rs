//! Per-call score accumulation.

use serde::{Deserialize, Serialize};

use curator_core::config::ClassifierConfig;
use curator_core::constants::{DEFAULT_BODY_WEIGHT, DEFAULT_TITLE_WEIGHT};
use curator_core::{MatchField, MatchHit, PostText};

use crate::table::MatcherTable;

/// Score added per matcher hit, by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub title: u32,
    pub body: u32,
}

impl ScoringWeights {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            title: config.title_weight,
            body: config.body_weight,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_WEIGHT,
            body: DEFAULT_BODY_WEIGHT,
        }
    }
}

/// Topic scores for one classification run, indexed in table order.
///
/// Starts at zero for every topic of the table and is dropped when the run
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: Vec<u32>,
}

impl ScoreBoard {
    pub fn zeroed(topic_count: usize) -> Self {
        Self {
            scores: vec![0; topic_count],
        }
    }

    fn add(&mut self, topic_index: usize, weight: u32) {
        let slot = &mut self.scores[topic_index];
        *slot = slot.saturating_add(weight);
    }

    pub fn get(&self, topic_index: usize) -> u32 {
        self.scores[topic_index]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Evaluate every matcher against both fields.
///
/// A matcher counts once per field no matter how often it matches there;
/// title and body are checked independently.
pub fn score(table: &MatcherTable, post: &PostText, weights: ScoringWeights) -> ScoreBoard {
    let mut board = ScoreBoard::zeroed(table.len());
    let matchers = table.matchers();
    for index in table.hits(&post.title) {
        board.add(matchers[index].topic_index(), weights.title);
    }
    for index in table.hits(&post.body) {
        board.add(matchers[index].topic_index(), weights.body);
    }
    board
}

/// Same as [`score`], also returning one [`MatchHit`] per contributing
/// matcher and field, title hits first.
pub fn score_with_evidence(
    table: &MatcherTable,
    post: &PostText,
    weights: ScoringWeights,
) -> (ScoreBoard, Vec<MatchHit>) {
    let mut board = ScoreBoard::zeroed(table.len());
    let mut hits = Vec::new();
    let fields = [
        (MatchField::Title, post.title.as_str(), weights.title),
        (MatchField::Body, post.body.as_str(), weights.body),
    ];

    for (field, text, weight) in fields {
        for index in table.hits(text) {
            let matcher = &table.matchers()[index];
            board.add(matcher.topic_index(), weight);
            let matched = matcher
                .regex()
                .find(text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            hits.push(MatchHit {
                topic: table.topic_at(matcher.topic_index()).clone(),
                pattern: matcher.pattern().to_string(),
                field,
                matched,
                weight,
            });
        }
    }

    (board, hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MatcherTable {
        MatcherTable::builder()
            .topic("fla", "Flash", ["SSD", "RAID"])
            .topic("dpr", "Protection", ["backup"])
            .build()
            .unwrap()
    }

    #[test]
    fn title_and_body_hits_are_independent() {
        let post = PostText::new("RAID", "a RAID array with backup");
        let board = score(&table(), &post, ScoringWeights::default());
        assert_eq!(board.as_slice(), &[4, 1]);
    }

    #[test]
    fn repeated_matches_count_once_per_field() {
        let post = PostText::new("SSD SSD SSD", "");
        let board = score(&table(), &post, ScoringWeights::default());
        assert_eq!(board.get(0), 3);
    }

    #[test]
    fn empty_post_scores_zero_everywhere() {
        let board = score(&table(), &PostText::default(), ScoringWeights::default());
        assert_eq!(board.as_slice(), &[0, 0]);
    }

    #[test]
    fn custom_weights_apply() {
        let weights = ScoringWeights { title: 5, body: 2 };
        let post = PostText::new("backup", "backup");
        let board = score(&table(), &post, weights);
        assert_eq!(board.get(1), 7);
    }

    #[test]
    fn evidence_matches_scores() {
        let post = PostText::new("RAID and SSD", "nightly backup jobs");
        let (board, hits) = score_with_evidence(&table(), &post, ScoringWeights::default());
        assert_eq!(board, score(&table(), &post, ScoringWeights::default()));
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].field, MatchField::Title);
        assert_eq!(hits[0].matched, "SSD");
        assert_eq!(hits[2].topic, "dpr");
        assert_eq!(hits[2].weight, 1);
    }
}
