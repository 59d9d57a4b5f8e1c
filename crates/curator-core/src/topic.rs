//! Topic identifiers.
//!
//! A [`Topic`] is the short key a post is filed under (`dpr`, `fla`, ...).
//! Keys are validated on construction so a `Topic` value is always well formed;
//! whether it belongs to a particular matcher table is checked by the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_TOPIC_KEY_LEN;
use crate::errors::{ConfigError, CuratorError};

/// Validated topic key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Validate and wrap a topic key: 1..=16 lowercase ASCII letters or digits,
    /// starting with a letter.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let invalid = |reason: &str| ConfigError::InvalidTopicKey {
            key: key.clone(),
            reason: reason.to_string(),
        };
        if key.is_empty() {
            return Err(invalid("key is empty"));
        }
        if key.len() > MAX_TOPIC_KEY_LEN {
            return Err(invalid("key is too long"));
        }
        if !key.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(invalid("key must start with a lowercase letter"));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(invalid("key may only contain lowercase letters and digits"));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for Topic {
    type Err = CuratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s)?)
    }
}

impl TryFrom<String> for Topic {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Topic {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Topic {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A topic together with the display name of its community group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDescriptor {
    pub topic: Topic,
    pub name: String,
}

impl TopicDescriptor {
    pub fn new(topic: Topic, name: impl Into<String>) -> Self {
        Self {
            topic,
            name: name.into(),
        }
    }
}
