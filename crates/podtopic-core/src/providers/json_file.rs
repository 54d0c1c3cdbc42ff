//! JSON corpus files exported from a transcript spreadsheet.
//!
//! Accepts either a JSON array of row objects or, for `.jsonl` files, one row
//! object per line. Header keys are trimmed and matched case-insensitively;
//! the title column is `title`, the text column is the first present of
//! `transcript`, `transript` (a common header misspelling in exported sheets)
//! and `text`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::CorpusError;
use crate::models::CorpusRecord;
use crate::traits::CorpusProvider;

const TITLE_KEYS: &[&str] = &["title"];
const TEXT_KEYS: &[&str] = &["transcript", "transript", "text"];

/// Corpus loaded from a JSON or JSON Lines file.
#[derive(Debug, Clone)]
pub struct JsonCorpusFile {
    path: PathBuf,
}

impl JsonCorpusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json_lines(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "jsonl")
    }

    fn parse_error(&self, message: impl Into<String>) -> CorpusError {
        CorpusError::Parse {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }

    fn rows(&self, content: &str) -> Result<Vec<Value>, CorpusError> {
        if self.is_json_lines() {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(idx, line)| {
                    serde_json::from_str(line)
                        .map_err(|e| self.parse_error(format!("line {}: {e}", idx + 1)))
                })
                .collect()
        } else {
            match serde_json::from_str::<Value>(content) {
                Ok(Value::Array(rows)) => Ok(rows),
                Ok(_) => Err(self.parse_error("expected a JSON array of rows")),
                Err(e) => Err(self.parse_error(e.to_string())),
            }
        }
    }
}

impl CorpusProvider for JsonCorpusFile {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<Vec<CorpusRecord>, CorpusError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CorpusError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        let rows = self.rows(&content)?;
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let Value::Object(fields) = row else {
                return Err(self.parse_error(format!("row {index} is not an object")));
            };
            let title = lookup(fields, TITLE_KEYS).ok_or(CorpusError::MissingField {
                index,
                field: "title",
            })?;
            let transcript = lookup(fields, TEXT_KEYS).ok_or(CorpusError::MissingField {
                index,
                field: "transcript",
            })?;
            records.push(CorpusRecord::new(title, transcript));
        }

        debug!(path = %self.path.display(), records = records.len(), "loaded corpus file");
        Ok(records)
    }
}

/// Value of the first key in `keys` (in priority order) present in the row,
/// matched on the trimmed, lowercased header and rendered as text.
fn lookup(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|wanted| {
        fields
            .iter()
            .filter(|(key, _)| key.trim().to_lowercase() == *wanted)
            .find_map(|(_, value)| render(value))
    })
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some(String::new()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
