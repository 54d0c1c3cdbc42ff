//! Corpus loading errors.

use super::error_code::{self, PodtopicErrorCode};

/// Errors raised by corpus providers.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus {path}: {message}")]
    Parse { path: String, message: String },

    #[error("corpus record {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("corpus source unavailable: {reason}")]
    Unavailable { reason: String },
}

impl PodtopicErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        error_code::CORPUS_ERROR
    }
}
