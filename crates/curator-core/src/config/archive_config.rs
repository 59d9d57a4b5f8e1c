use serde::{Deserialize, Serialize};

use super::defaults;

/// Where saved posts live and how they are read and reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Directory holding downloaded post HTML. Default: "posts".
    pub posts_dir: String,
    /// Only files whose name starts with this prefix are scanned. Default: "20".
    pub file_prefix: String,
    /// Only files with this extension are scanned. Default: "html".
    pub file_extension: String,
    /// Reclassification report output. Default: "reclassify.txt".
    pub report_path: String,
    /// Regex whose first capture group is the topic key in a post file name.
    pub naming_pattern: String,
    /// Classify posts in parallel. Default: true.
    pub parallel: bool,
    pub title_selector: String,
    pub body_selector: String,
    /// Elements inside the body container whose text forms the body, in order.
    pub body_part_selectors: Vec<String>,
    pub permalink_selector: String,
    pub author_meta_selector: String,
    pub byline_selector: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            posts_dir: defaults::DEFAULT_POSTS_DIR.to_string(),
            file_prefix: defaults::DEFAULT_FILE_PREFIX.to_string(),
            file_extension: defaults::DEFAULT_FILE_EXTENSION.to_string(),
            report_path: defaults::DEFAULT_REPORT_PATH.to_string(),
            naming_pattern: defaults::DEFAULT_NAMING_PATTERN.to_string(),
            parallel: true,
            title_selector: defaults::DEFAULT_TITLE_SELECTOR.to_string(),
            body_selector: defaults::DEFAULT_BODY_SELECTOR.to_string(),
            body_part_selectors: defaults::DEFAULT_BODY_PART_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            permalink_selector: defaults::DEFAULT_PERMALINK_SELECTOR.to_string(),
            author_meta_selector: defaults::DEFAULT_AUTHOR_META_SELECTOR.to_string(),
            byline_selector: defaults::DEFAULT_BYLINE_SELECTOR.to_string(),
        }
    }
}
