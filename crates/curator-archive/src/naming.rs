//! Current topic of a post, inferred from its file name.
//!
//! Saved posts are named `<date>-<topic><n>[-slug].html`, e.g.
//! `2020-07-15-fla012.html`.

use std::path::Path;

use regex::Regex;

use curator_classifier::MatcherTable;
use curator_core::config::defaults::DEFAULT_NAMING_PATTERN;
use curator_core::errors::{ArchiveError, ConfigError, CuratorResult};
use curator_core::Topic;

#[derive(Debug, Clone)]
pub struct TopicNaming {
    regex: Regex,
}

impl TopicNaming {
    /// Compile a naming pattern. Its first capture group is the topic key.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidPattern {
            topic: "naming".to_string(),
            pattern: pattern.to_string(),
            reason,
        };
        let regex = Regex::new(pattern).map_err(|e| invalid(e.to_string()))?;
        if regex.captures_len() < 2 {
            return Err(invalid("pattern needs a capture group for the topic".into()));
        }
        Ok(Self { regex })
    }

    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_NAMING_PATTERN)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Topic key embedded in `name`.
    pub fn infer(&self, name: &str) -> CuratorResult<Topic> {
        let naming_error = || ArchiveError::NamingConvention {
            name: name.to_string(),
        };
        let key = self
            .regex
            .captures(name)
            .and_then(|caps| caps.get(1))
            .ok_or_else(naming_error)?;
        Topic::new(key.as_str()).map_err(|_| naming_error().into())
    }

    /// Like [`infer`](Self::infer), but the topic must also be in `table`.
    pub fn resolve(&self, name: &str, table: &MatcherTable) -> CuratorResult<Topic> {
        let topic = self.infer(name)?;
        if !table.contains(&topic) {
            return Err(ConfigError::UnknownTopic {
                topic: topic.to_string(),
            }
            .into());
        }
        Ok(topic)
    }

    /// Infer from the file-name component of `path`.
    pub fn infer_from_path(&self, path: &Path) -> CuratorResult<Topic> {
        self.infer(&file_name_of(path))
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
