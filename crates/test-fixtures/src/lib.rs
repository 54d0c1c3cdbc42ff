//! Test fixture loader for podtopic corpora.
//!
//! Fixture corpora live as JSON files under `corpora/` in this crate and are
//! shared by the tests of every crate in the workspace.

use std::path::PathBuf;

use podtopic_core::models::CorpusRecord;
use podtopic_core::providers::InMemoryCorpus;
use serde::de::DeserializeOwned;

/// Six episodes in two clean topics: three cooking, three personal finance.
pub const COOKING_FINANCE: &str = "cooking_finance.json";
/// A one-episode corpus.
pub const SINGLE_EPISODE: &str = "single_episode.json";
/// Fifteen episodes across cooking, finance, fitness and startups.
pub const LIBRARY: &str = "library.json";
/// JSON Lines export with padded, misspelled spreadsheet headers.
pub const SPREADSHEET_EXPORT: &str = "spreadsheet_export.jsonl";

/// Root directory of the fixture corpora.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpora")
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

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON corpora.
pub fn list_fixtures() -> Vec<PathBuf> {
    let dir = fixtures_root();
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// Load a fixture corpus as records.
pub fn load_records(relative_path: &str) -> Vec<CorpusRecord> {
    load_fixture(relative_path)
}

/// Load a fixture corpus into an in-memory provider.
pub fn load_corpus(relative_path: &str) -> InMemoryCorpus {
    InMemoryCorpus::new(load_records(relative_path))
}

pub fn cooking_finance_corpus() -> InMemoryCorpus {
    load_corpus(COOKING_FINANCE)
}

pub fn single_episode_corpus() -> InMemoryCorpus {
    load_corpus(SINGLE_EPISODE)
}

pub fn library_corpus() -> InMemoryCorpus {
    load_corpus(LIBRARY)
}
