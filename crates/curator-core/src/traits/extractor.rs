use crate::errors::CuratorResult;
use crate::models::ExtractedPost;

/// Turns raw post markup into title/body text and metadata.
pub trait IContentExtractor: Send + Sync {
    fn extract(&self, markup: &str) -> CuratorResult<ExtractedPost>;
}
