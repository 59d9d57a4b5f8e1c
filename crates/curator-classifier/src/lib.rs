//! # curator-classifier
//!
//! Assigns a blog post to one of a fixed set of topics.
//! Every matcher that hits the title adds the title weight (3) to its topic,
//! every matcher that hits the body adds the body weight (1). Topics are ranked
//! by score with ties kept in table order, and a post that ties for the lead
//! stays in its current topic.

pub mod decision;
pub mod engine;
pub mod patterns;
pub mod ranking;
pub mod scoring;
pub mod table;

pub use engine::{classify, classify_with, classify_with_evidence, ClassifierEngine};
pub use scoring::{ScoreBoard, ScoringWeights};
pub use table::{Matcher, MatcherTable, MatcherTableBuilder};
