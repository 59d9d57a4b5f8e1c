mod action;
mod classification;
mod post;

pub use action::Action;
pub use classification::{ClassificationResult, MatchField, MatchHit, TopicScore};
pub use post::{ExtractedPost, PostText};
