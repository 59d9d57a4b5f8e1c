mod archive_error;
mod config_error;
pub mod error_code;

pub use archive_error::ArchiveError;
pub use config_error::ConfigError;
pub use error_code::CuratorErrorCode;

/// Top-level error for every Curator crate.
#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CuratorErrorCode for CuratorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Archive(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

impl CuratorError {
    /// True for errors caused by configuration rather than by a single post.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type CuratorResult<T> = Result<T, CuratorError>;
