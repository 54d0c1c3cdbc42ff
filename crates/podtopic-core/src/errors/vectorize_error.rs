//! Vectorization errors.

use super::error_code::{self, PodtopicErrorCode};

/// Errors raised while building the TF-IDF feature space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorizeError {
    #[error("cannot vectorize an empty corpus")]
    EmptyCorpus,

    #[error("empty vocabulary: {documents} documents contain only stop words or no terms")]
    EmptyVocabulary { documents: usize },
}

impl PodtopicErrorCode for VectorizeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCorpus => error_code::EMPTY_CORPUS,
            Self::EmptyVocabulary { .. } => error_code::EMPTY_VOCABULARY,
        }
    }
}
