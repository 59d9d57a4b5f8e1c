//! Compiled, immutable topic → matcher table.
//!
//! Every pattern is compiled when the table is built, so an invalid regex is
//! reported before any post is classified. All patterns are additionally
//! compiled into one [`RegexSet`] so each field is scanned in a single pass.

use regex::{Regex, RegexSet};

use curator_core::config::ClassifierConfig;
use curator_core::errors::{ConfigError, CuratorResult};
use curator_core::{Topic, TopicDescriptor};

use crate::patterns;

/// One compiled pattern bound to a topic.
#[derive(Debug, Clone)]
pub struct Matcher {
    topic_index: usize,
    regex: Regex,
}

impl Matcher {
    /// Index of the owning topic in table order.
    pub fn topic_index(&self) -> usize {
        self.topic_index
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Topic → ordered matchers. Topic order is declaration order and is the
/// tie order used by ranking.
#[derive(Debug, Clone)]
pub struct MatcherTable {
    topics: Vec<TopicDescriptor>,
    /// All matchers, grouped by topic, in declaration order.
    matchers: Vec<Matcher>,
    /// Same patterns as `matchers`, index for index.
    set: RegexSet,
}

impl MatcherTable {
    pub fn builder() -> MatcherTableBuilder {
        MatcherTableBuilder::default()
    }

    /// The storage community table shipped with the crate.
    pub fn builtin() -> CuratorResult<Self> {
        let mut builder = Self::builder();
        for topic in patterns::all_topics() {
            builder = builder.topic(topic.key, topic.name, topic.patterns.iter().copied());
        }
        Ok(builder.build()?)
    }

    /// Build from configuration: the built-in topics (unless disabled), with
    /// configured topics replacing built-in patterns by key or appended.
    ///
    /// Rejects a table without any matcher, since nothing could be classified.
    pub fn from_config(config: &ClassifierConfig) -> CuratorResult<Self> {
        let mut specs: Vec<TopicSpec> = if config.builtin_topics {
            patterns::all_topics()
                .iter()
                .map(|t| TopicSpec {
                    key: t.key.to_string(),
                    name: t.name.to_string(),
                    patterns: t.patterns.iter().map(|p| p.to_string()).collect(),
                })
                .collect()
        } else {
            Vec::new()
        };

        for declared in &config.topics {
            match specs.iter_mut().find(|s| s.key == declared.key) {
                Some(existing) => {
                    existing.patterns = declared.patterns.clone();
                    if let Some(name) = &declared.name {
                        existing.name = name.clone();
                    }
                }
                None => specs.push(TopicSpec {
                    key: declared.key.clone(),
                    name: declared.name.clone().unwrap_or_else(|| declared.key.clone()),
                    patterns: declared.patterns.clone(),
                }),
            }
        }

        let table = MatcherTableBuilder { specs }.build()?;
        if table.is_empty() {
            return Err(ConfigError::EmptyTable.into());
        }
        Ok(table)
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// True when no topic has a matcher; such a table cannot classify.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }

    /// Topics in table order.
    pub fn topics(&self) -> &[TopicDescriptor] {
        &self.topics
    }

    pub fn topic_at(&self, index: usize) -> &Topic {
        &self.topics[index].topic
    }

    pub fn index_of(&self, topic: &Topic) -> Option<usize> {
        self.topics.iter().position(|d| &d.topic == topic)
    }

    pub fn contains(&self, topic: &Topic) -> bool {
        self.index_of(topic).is_some()
    }

    /// Look a topic up by its raw key.
    pub fn find(&self, key: &str) -> Option<&TopicDescriptor> {
        self.topics.iter().find(|d| d.topic == key)
    }

    /// Display name of `topic`.
    pub fn name_of(&self, topic: &Topic) -> Option<&str> {
        self.index_of(topic).map(|i| self.topics[i].name.as_str())
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Matchers of one topic, in declaration order.
    pub fn matchers_for(&self, topic: &Topic) -> impl Iterator<Item = &Matcher> {
        let index = self.index_of(topic);
        self.matchers
            .iter()
            .filter(move |m| Some(m.topic_index) == index)
    }

    /// Indices (into [`matchers`](Self::matchers)) of every matcher that finds
    /// at least one match in `text`.
    pub fn hits(&self, text: &str) -> impl Iterator<Item = usize> {
        self.set.matches(text).into_iter()
    }
}

#[derive(Debug, Clone)]
struct TopicSpec {
    key: String,
    name: String,
    patterns: Vec<String>,
}

/// Collects topics in declaration order, then compiles them all at once.
#[derive(Debug, Default)]
pub struct MatcherTableBuilder {
    specs: Vec<TopicSpec>,
}

impl MatcherTableBuilder {
    /// Declare a topic with its display name and patterns.
    pub fn topic<I, S>(mut self, key: &str, name: &str, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specs.push(TopicSpec {
            key: key.to_string(),
            name: name.to_string(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Validate keys, compile every pattern, and freeze the table.
    pub fn build(self) -> Result<MatcherTable, ConfigError> {
        let mut topics: Vec<TopicDescriptor> = Vec::with_capacity(self.specs.len());
        let mut matchers = Vec::new();

        for (topic_index, spec) in self.specs.into_iter().enumerate() {
            let topic = Topic::new(spec.key)?;
            if topics.iter().any(|d| d.topic == topic) {
                return Err(ConfigError::DuplicateTopic {
                    topic: topic.to_string(),
                });
            }

            for pattern in spec.patterns {
                let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidPattern {
                    topic: topic.to_string(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
                matchers.push(Matcher { topic_index, regex });
            }

            topics.push(TopicDescriptor::new(topic, spec.name));
        }

        let set = RegexSet::new(matchers.iter().map(|m| m.regex.as_str())).map_err(|e| {
            ConfigError::InvalidPattern {
                topic: "*".to_string(),
                pattern: format!("<set of {} patterns>", matchers.len()),
                reason: e.to_string(),
            }
        })?;

        Ok(MatcherTable {
            topics,
            matchers,
            set,
        })
    }
}
