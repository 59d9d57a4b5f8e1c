use crate::errors::CuratorResult;
use crate::models::{ClassificationResult, PostText};
use crate::topic::{Topic, TopicDescriptor};

/// Topic classification of a single post.
///
/// Implementations must be pure: identical inputs give identical results and
/// no state is shared between calls.
pub trait IClassifier: Send + Sync {
    /// Score `post` against every known topic and recommend an action
    /// relative to `current`.
    fn classify(&self, post: &PostText, current: &Topic) -> CuratorResult<ClassificationResult>;

    /// Known topics in table order.
    fn topics(&self) -> Vec<TopicDescriptor>;
}
