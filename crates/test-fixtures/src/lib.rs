//! Test fixture loader for Curator golden datasets and sample posts.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! locating saved post HTML from tests in any crate of the workspace.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") && path.join("golden").exists() {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Read a fixture file as text (used for saved post HTML).
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all files with `extension` in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str, extension: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == extension) {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

// ── Typed golden classification cases ─────────────────────────────────────

/// A topic declared inline by a golden case.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenTopic {
    pub key: String,
    pub patterns: Vec<String>,
}

/// Expected output of a golden case.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub action: String,
    pub top: String,
    /// `(topic, score)` pairs in ranking order.
    pub ranking: Vec<(String, u32)>,
}

/// One classification scenario. `table` is `None` for cases that run
/// against the built-in table.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub id: String,
    pub title: String,
    pub body: String,
    pub current: String,
    #[serde(default)]
    pub table: Option<Vec<GoldenTopic>>,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSuite {
    pub cases: Vec<GoldenCase>,
}

/// Load a golden classification suite.
pub fn load_golden_suite(relative_path: &str) -> GoldenSuite {
    load_fixture(relative_path)
}
