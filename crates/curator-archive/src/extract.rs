//! Title, body and metadata extraction from saved post pages.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use curator_core::config::ArchiveConfig;
use curator_core::errors::{ConfigError, CuratorResult};
use curator_core::traits::IContentExtractor;
use curator_core::{ExtractedPost, PostText};

/// First line of the description meta tag on community blog pages.
const POSTED_BY_PATTERN: &str = r"posted by: (.*)$";

/// CSS-selector driven extractor for community blog post pages.
#[derive(Debug, Clone)]
pub struct HtmlExtractor {
    title: Selector,
    body: Selector,
    body_parts: Vec<Selector>,
    permalink: Selector,
    author_meta: Selector,
    byline: Selector,
    posted_by: Regex,
}

impl HtmlExtractor {
    /// Parse every configured selector up front.
    pub fn new(config: &ArchiveConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title: parse_selector(&config.title_selector)?,
            body: parse_selector(&config.body_selector)?,
            body_parts: config
                .body_part_selectors
                .iter()
                .map(|s| parse_selector(s))
                .collect::<Result<_, _>>()?,
            permalink: parse_selector(&config.permalink_selector)?,
            author_meta: parse_selector(&config.author_meta_selector)?,
            byline: parse_selector(&config.byline_selector)?,
            posted_by: Regex::new(POSTED_BY_PATTERN).map_err(|e| ConfigError::InvalidPattern {
                topic: "author".to_string(),
                pattern: POSTED_BY_PATTERN.to_string(),
                reason: e.to_string(),
            })?,
        })
    }

    /// Extractor for the default community page layout.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(&ArchiveConfig::default())
    }

    /// Extract from already-parsed markup.
    pub fn extract_document(&self, document: &Html) -> ExtractedPost {
        ExtractedPost {
            text: PostText {
                title: self.title_of(document),
                body: self.body_of(document),
            },
            permalink: self.permalink_of(document),
            author: self.author_of(document),
        }
    }

    fn title_of(&self, document: &Html) -> String {
        document
            .select(&self.title)
            .next()
            .map(|el| collapse_newlines(&element_text(&el)))
            .unwrap_or_default()
    }

    /// Every body part of every body container, each prefixed with a space.
    fn body_of(&self, document: &Html) -> String {
        let mut body = String::new();
        for container in document.select(&self.body) {
            for part in &self.body_parts {
                for el in container.select(part) {
                    body.push(' ');
                    body.push_str(&collapse_newlines(&element_text(&el)));
                }
            }
        }
        body
    }

    fn permalink_of(&self, document: &Html) -> Option<String> {
        document
            .select(&self.permalink)
            .next()
            .and_then(|el| el.value().attr("value"))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// `posted by:` in the description meta tag, else the profile byline.
    fn author_of(&self, document: &Html) -> Option<String> {
        let from_meta = document
            .select(&self.author_meta)
            .next()
            .and_then(|el| el.value().attr("content"))
            .and_then(|content| content.lines().next())
            .and_then(|first| self.posted_by.captures(first))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());

        from_meta
            .or_else(|| {
                document
                    .select(&self.byline)
                    .next()
                    .map(|el| element_text(&el).trim().to_string())
            })
            .filter(|name| !name.is_empty())
    }
}

impl IContentExtractor for HtmlExtractor {
    fn extract(&self, markup: &str) -> CuratorResult<ExtractedPost> {
        let document = Html::parse_document(markup);
        Ok(self.extract_document(&document))
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// All descendant text of `el`, concatenated as-is.
fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
