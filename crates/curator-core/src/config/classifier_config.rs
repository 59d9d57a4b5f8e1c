use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BODY_WEIGHT, DEFAULT_TITLE_WEIGHT};

/// Classifier configuration: scoring weights and the topic table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Score added per matcher that hits the title. Default: 3.
    pub title_weight: u32,
    /// Score added per matcher that hits the body. Default: 1.
    pub body_weight: u32,
    /// Start from the built-in storage topics. Default: true.
    pub builtin_topics: bool,
    /// Topics declared in configuration. A key that matches a built-in
    /// topic replaces its patterns; new keys are appended in order.
    pub topics: Vec<TopicConfig>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            title_weight: DEFAULT_TITLE_WEIGHT,
            body_weight: DEFAULT_BODY_WEIGHT,
            builtin_topics: true,
            topics: Vec::new(),
        }
    }
}

/// One topic as declared in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicConfig {
    pub key: String,
    /// Display name of the community group. Defaults to the key.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}
