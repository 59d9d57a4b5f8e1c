mod classifier;
mod extractor;

pub use classifier::IClassifier;
pub use extractor::IContentExtractor;
