//! # curator-core
//!
//! Foundation crate for the Curator blog-archive tooling.
//! Defines topics, classification results, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod topic;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CuratorConfig;
pub use errors::{CuratorError, CuratorResult};
pub use models::{
    Action, ClassificationResult, ExtractedPost, MatchField, MatchHit, PostText, TopicScore,
};
pub use topic::{Topic, TopicDescriptor};
