//! Default values shared by the config sections.

pub const DEFAULT_POSTS_DIR: &str = "posts";
pub const DEFAULT_FILE_PREFIX: &str = "20";
pub const DEFAULT_FILE_EXTENSION: &str = "html";
pub const DEFAULT_REPORT_PATH: &str = "reclassify.txt";

/// Leading date digits/dashes, then the topic letters, then a sequence digit.
pub const DEFAULT_NAMING_PATTERN: &str = r"^[-0-9]*([a-z]+)[0-9]";

pub const DEFAULT_TITLE_SELECTOR: &str = "h3.blogTitle";
pub const DEFAULT_BODY_SELECTOR: &str = "div.col-md-12";
pub const DEFAULT_BODY_PART_SELECTORS: [&str; 3] = ["p", "table", "dl"];
pub const DEFAULT_PERMALINK_SELECTOR: &str = "div.permalink-block input";
pub const DEFAULT_AUTHOR_META_SELECTOR: &str = r#"meta[name="description"]"#;
pub const DEFAULT_BYLINE_SELECTOR: &str = "a#MainCopy_ctl04_ucPermission_UserName_lnkProfile";

pub const DEFAULT_LOG_LEVEL: &str = "info";
