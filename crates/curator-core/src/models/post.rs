use serde::{Deserialize, Serialize};

/// Plain text of a post, already stripped of markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostText {
    pub title: String,
    pub body: String,
}

impl PostText {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Text plus metadata pulled out of a saved post page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPost {
    pub text: PostText,
    pub permalink: Option<String>,
    pub author: Option<String>,
}
