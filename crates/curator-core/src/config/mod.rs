mod archive_config;
mod classifier_config;
pub mod defaults;
mod observability_config;

pub use archive_config::ArchiveConfig;
pub use classifier_config::{ClassifierConfig, TopicConfig};
pub use observability_config::ObservabilityConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, CuratorResult};

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty TOML document is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    pub classifier: ClassifierConfig,
    pub archive: ArchiveConfig,
    pub observability: ObservabilityConfig,
}

impl CuratorConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(source: &str) -> CuratorResult<Self> {
        Self::parse(source, "<inline>")
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> CuratorResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: display.clone(),
            },
            _ => ConfigError::ParseError {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;
        Self::parse(&source, &display)
    }

    fn parse(source: &str, path: &str) -> CuratorResult<Self> {
        toml::from_str(source).map_err(|e| {
            ConfigError::ParseError {
                path: path.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}
