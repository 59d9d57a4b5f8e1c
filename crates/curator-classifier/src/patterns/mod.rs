//! Built-in pattern table for the storage community blog.
//!
//! One module per topic group. Patterns are plain regex source strings;
//! they are compiled and validated together by
//! [`MatcherTable::builtin`](crate::MatcherTable::builtin).

pub mod data_protection;
pub mod file_object;
pub mod flash;
pub mod mainframe;
pub mod management;
pub mod networking;
pub mod tape;

/// A topic group as shipped with the crate.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTopic {
    pub key: &'static str,
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

/// All built-in topics in table order.
pub fn all_topics() -> [BuiltinTopic; 7] {
    [
        data_protection::TOPIC,
        flash::TOPIC,
        file_object::TOPIC,
        mainframe::TOPIC,
        networking::TOPIC,
        management::TOPIC,
        tape::TOPIC,
    ]
}
