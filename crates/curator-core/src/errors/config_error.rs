use super::error_code::{self, CuratorErrorCode};

/// Errors raised while loading or validating configuration, and when a
/// classification call is made against a table it cannot be evaluated with.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("topic '{topic}' is not in the configured topic set")]
    UnknownTopic { topic: String },

    #[error("matcher table has no topic with at least one matcher")]
    EmptyTable,

    #[error("invalid pattern for topic '{topic}': {pattern}: {reason}")]
    InvalidPattern {
        topic: String,
        pattern: String,
        reason: String,
    },

    #[error("topic '{topic}' is declared more than once")]
    DuplicateTopic { topic: String },

    #[error("invalid topic key '{key}': {reason}")]
    InvalidTopicKey { key: String, reason: String },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },
}

impl CuratorErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
