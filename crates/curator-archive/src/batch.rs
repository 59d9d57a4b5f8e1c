//! Batch classification of a directory of saved posts.
//!
//! Posts are listed up front (non-recursive, sorted by name), then read,
//! extracted and classified in parallel. Results come back in listing order
//! regardless of which worker finished first. A post that fails is recorded
//! and skipped; only problems with the directory itself or the table abort
//! the batch.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use curator_classifier::ClassifierEngine;
use curator_core::config::ArchiveConfig;
use curator_core::errors::{ArchiveError, ConfigError, CuratorErrorCode, CuratorResult};
use curator_core::traits::IContentExtractor;
use curator_core::{Action, ClassificationResult, CuratorConfig, MatchHit, Topic};
use curator_observability::tracing_setup::events;
use curator_observability::{batch_span, classification_span, ScanMetrics};

use crate::extract::HtmlExtractor;
use crate::naming::{file_name_of, TopicNaming};
use crate::report::{encode_post_id, ReclassificationRecord};

/// A successfully classified post.
#[derive(Debug, Clone, Serialize)]
pub struct PostOutcome {
    pub file_name: String,
    pub path: PathBuf,
    /// Permalink when the page has one, otherwise the file name, with
    /// whitespace percent-encoded.
    pub post_id: String,
    pub author: Option<String>,
    pub result: ClassificationResult,
    pub hits: Vec<MatchHit>,
}

impl PostOutcome {
    pub fn record(&self) -> ReclassificationRecord {
        ReclassificationRecord::from_result(&self.result, &self.post_id)
    }
}

/// A post that could not be classified.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedPost {
    pub file_name: String,
    pub error_code: String,
    pub reason: String,
}

/// How many posts ended up with a given top topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicTally {
    pub topic: Topic,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub dir: String,
    /// In file-name order.
    pub outcomes: Vec<PostOutcome>,
    pub skipped: Vec<SkippedPost>,
    /// Every topic of the table, in table order.
    pub tally: Vec<TopicTally>,
    pub metrics: ScanMetrics,
}

impl BatchReport {
    pub fn records(&self) -> Vec<ReclassificationRecord> {
        self.outcomes.iter().map(PostOutcome::record).collect()
    }

    pub fn count(&self, action: Action) -> usize {
        self.metrics.count(action)
    }
}

/// Lists, extracts and classifies the posts of one directory.
#[derive(Debug, Clone)]
pub struct BatchScanner {
    engine: ClassifierEngine,
    extractor: HtmlExtractor,
    naming: TopicNaming,
    file_prefix: String,
    file_extension: String,
    parallel: bool,
}

impl BatchScanner {
    pub fn new(engine: ClassifierEngine, config: &ArchiveConfig) -> CuratorResult<Self> {
        Ok(Self {
            engine,
            extractor: HtmlExtractor::new(config)?,
            naming: TopicNaming::new(&config.naming_pattern)?,
            file_prefix: config.file_prefix.clone(),
            file_extension: config.file_extension.trim_start_matches('.').to_string(),
            parallel: config.parallel,
        })
    }

    /// Engine and scanner from a full configuration.
    pub fn from_config(config: &CuratorConfig) -> CuratorResult<Self> {
        let engine = ClassifierEngine::from_config(&config.classifier)?;
        Self::new(engine, &config.archive)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn engine(&self) -> &ClassifierEngine {
        &self.engine
    }

    /// Post files directly inside `dir`, sorted by name. Symlinks to files
    /// count as posts; dangling links are logged and left out.
    pub fn list_posts(&self, dir: &Path) -> CuratorResult<Vec<PathBuf>> {
        let mut posts = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    tracing::warn!(path = ?e.path(), error = %e, "unreadable directory entry");
                    continue;
                }
                Err(e) => return Err(ArchiveError::io(dir.display().to_string(), e.into()).into()),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            let extension_matches = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.to_string_lossy() == self.file_extension);
            if name.starts_with(&self.file_prefix) && extension_matches {
                posts.push(entry.into_path());
            }
        }
        posts.sort_by_key(|p| file_name_of(p));
        Ok(posts)
    }

    /// Classify every post in `dir`.
    pub fn scan(&self, dir: &Path) -> CuratorResult<BatchReport> {
        if self.engine.table().is_empty() {
            return Err(ConfigError::EmptyTable.into());
        }

        let start = Instant::now();
        let paths = self.list_posts(dir)?;
        let span = batch_span!(dir.display(), paths.len());
        let _guard = span.enter();

        let results: Vec<(String, CuratorResult<PostOutcome>)> = if self.parallel {
            paths
                .par_iter()
                .map(|p| (file_name_of(p), self.classify_file(p)))
                .collect()
        } else {
            paths
                .iter()
                .map(|p| (file_name_of(p), self.classify_file(p)))
                .collect()
        };

        let mut metrics = ScanMetrics::new();
        let mut outcomes = Vec::with_capacity(results.len());
        let mut skipped = Vec::new();
        for (file_name, result) in results {
            match result {
                Ok(outcome) => {
                    log_outcome(&outcome);
                    metrics.record_action(outcome.result.action);
                    outcomes.push(outcome);
                }
                Err(e) => {
                    events::post_skipped(&file_name, e.error_code(), &e.to_string());
                    metrics.record_skipped(e.error_code());
                    skipped.push(SkippedPost {
                        file_name,
                        error_code: e.error_code().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        metrics.finish(start.elapsed());
        events::batch_completed(
            outcomes.len(),
            skipped.len(),
            metrics.count(Action::Move),
            metrics.count(Action::Eval),
            metrics.elapsed_ms,
        );

        Ok(BatchReport {
            generated_at: Utc::now(),
            dir: dir.display().to_string(),
            tally: self.tally(&outcomes),
            outcomes,
            skipped,
            metrics,
        })
    }

    /// Classify one saved post, taking its current topic from the file name.
    pub fn classify_file(&self, path: &Path) -> CuratorResult<PostOutcome> {
        self.classify_file_as(path, None)
    }

    /// Classify one saved post; `current` overrides the file-name topic.
    pub fn classify_file_as(&self, path: &Path, current: Option<&Topic>) -> CuratorResult<PostOutcome> {
        let file_name = file_name_of(path);
        let current = match current {
            Some(topic) => topic.clone(),
            None => self.naming.resolve(&file_name, self.engine.table())?,
        };
        let markup = fs::read_to_string(path)
            .map_err(|e| ArchiveError::io(path.display().to_string(), e))?;
        self.classify_markup(&file_name, &markup, &current)
            .map(|outcome| PostOutcome {
                path: path.to_path_buf(),
                ..outcome
            })
    }

    /// Classify already-loaded page markup.
    pub fn classify_markup(&self, file_name: &str, markup: &str, current: &Topic) -> CuratorResult<PostOutcome> {
        let span = classification_span!(file_name, current);
        let _guard = span.enter();

        let extracted = self.extractor.extract(markup)?;
        let (result, hits) = self.engine.classify_with_evidence(&extracted.text, current)?;
        Ok(PostOutcome {
            file_name: file_name.to_string(),
            path: PathBuf::from(file_name),
            post_id: encode_post_id(extracted.permalink.as_deref().unwrap_or(file_name)),
            author: extracted.author,
            result,
            hits,
        })
    }

    fn tally(&self, outcomes: &[PostOutcome]) -> Vec<TopicTally> {
        self.engine
            .table()
            .topics()
            .iter()
            .map(|d| TopicTally {
                topic: d.topic.clone(),
                name: d.name.clone(),
                count: outcomes.iter().filter(|o| o.result.top == d.topic).count(),
            })
            .collect()
    }
}

fn log_outcome(outcome: &PostOutcome) {
    for hit in &outcome.hits {
        events::matcher_hit(
            &outcome.file_name,
            hit.topic.as_str(),
            &hit.pattern,
            hit.field,
            hit.weight,
        );
    }
    let result = &outcome.result;
    events::post_classified(
        &outcome.file_name,
        result.current.as_str(),
        result.top.as_str(),
        result.action,
        result.top_score(),
    );
}
