use super::error_code::{self, CuratorErrorCode};

/// Errors from the archive layer: reading posts, naming conventions and report files.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to determine topic of post from name: {name}")]
    NamingConvention { name: String },

    #[error("malformed report line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl ArchiveError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl CuratorErrorCode for ArchiveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::NamingConvention { .. } => error_code::NAMING_ERROR,
            Self::MalformedRecord { .. } => error_code::REPORT_ERROR,
        }
    }
}
