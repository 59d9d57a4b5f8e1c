/// Curator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score added when a matcher hits the post title.
pub const DEFAULT_TITLE_WEIGHT: u32 = 3;

/// Score added when a matcher hits the post body.
pub const DEFAULT_BODY_WEIGHT: u32 = 1;

/// Maximum length of a topic key.
pub const MAX_TOPIC_KEY_LEN: usize = 16;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CURATOR_LOG";
