//! Classification entry points.

use std::sync::Arc;

use curator_core::config::ClassifierConfig;
use curator_core::errors::{ConfigError, CuratorResult};
use curator_core::traits::IClassifier;
use curator_core::{
    ClassificationResult, MatchHit, PostText, Topic, TopicDescriptor, TopicScore,
};

use crate::decision;
use crate::ranking;
use crate::scoring::{self, ScoreBoard, ScoringWeights};
use crate::table::MatcherTable;

/// Classify a post with the default weights (title 3, body 1).
///
/// Fails with a configuration error when `table` has no matcher at all or
/// `current` is not one of its topics.
pub fn classify(
    title: &str,
    body: &str,
    current: &Topic,
    table: &MatcherTable,
) -> CuratorResult<ClassificationResult> {
    classify_with(
        &PostText::new(title, body),
        current,
        table,
        ScoringWeights::default(),
    )
}

/// Classify a post with explicit weights.
pub fn classify_with(
    post: &PostText,
    current: &Topic,
    table: &MatcherTable,
    weights: ScoringWeights,
) -> CuratorResult<ClassificationResult> {
    let current_index = validate(current, table)?;
    let board = scoring::score(table, post, weights);
    Ok(finish(board, current_index, table))
}

/// Classify a post and also return which matchers fired on which field.
pub fn classify_with_evidence(
    post: &PostText,
    current: &Topic,
    table: &MatcherTable,
    weights: ScoringWeights,
) -> CuratorResult<(ClassificationResult, Vec<MatchHit>)> {
    let current_index = validate(current, table)?;
    let (board, hits) = scoring::score_with_evidence(table, post, weights);
    Ok((finish(board, current_index, table), hits))
}

fn validate(current: &Topic, table: &MatcherTable) -> Result<usize, ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::EmptyTable);
    }
    table
        .index_of(current)
        .ok_or_else(|| ConfigError::UnknownTopic {
            topic: current.to_string(),
        })
}

/// Rank, apply the keep-current override, and pick the action. All matchers
/// have been evaluated by the time this runs.
fn finish(board: ScoreBoard, current_index: usize, table: &MatcherTable) -> ClassificationResult {
    let scores = board.as_slice();
    let mut order = ranking::rank(scores);
    ranking::apply_stability(&mut order, scores, current_index);
    let action = decision::decide(&order, scores, current_index);

    let ranking = order
        .iter()
        .map(|&i| TopicScore {
            topic: table.topic_at(i).clone(),
            score: scores[i],
        })
        .collect::<Vec<_>>();

    ClassificationResult {
        top: ranking[0].topic.clone(),
        current: table.topic_at(current_index).clone(),
        ranking,
        action,
    }
}

/// Shared, immutable classifier: a compiled table plus scoring weights.
///
/// Cheap to clone; safe to use from many threads at once.
#[derive(Debug, Clone)]
pub struct ClassifierEngine {
    table: Arc<MatcherTable>,
    weights: ScoringWeights,
}

impl ClassifierEngine {
    pub fn new(table: MatcherTable, weights: ScoringWeights) -> Self {
        Self {
            table: Arc::new(table),
            weights,
        }
    }

    /// Built-in storage topics with default weights.
    pub fn builtin() -> CuratorResult<Self> {
        Ok(Self::new(MatcherTable::builtin()?, ScoringWeights::default()))
    }

    pub fn from_config(config: &ClassifierConfig) -> CuratorResult<Self> {
        Ok(Self::new(
            MatcherTable::from_config(config)?,
            ScoringWeights::from_config(config),
        ))
    }

    pub fn table(&self) -> &MatcherTable {
        &self.table
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn classify_with_evidence(
        &self,
        post: &PostText,
        current: &Topic,
    ) -> CuratorResult<(ClassificationResult, Vec<MatchHit>)> {
        classify_with_evidence(post, current, &self.table, self.weights)
    }
}

impl IClassifier for ClassifierEngine {
    fn classify(&self, post: &PostText, current: &Topic) -> CuratorResult<ClassificationResult> {
        classify_with(post, current, &self.table, self.weights)
    }

    fn topics(&self) -> Vec<TopicDescriptor> {
        self.table.topics().to_vec()
    }
}
