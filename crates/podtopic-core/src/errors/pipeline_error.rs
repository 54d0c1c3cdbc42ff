//! Pipeline errors and non-fatal warnings.

use serde::{Deserialize, Serialize};

use super::error_code::{self, PodtopicErrorCode};
use super::{ClusterError, ConfigError, CorpusError, VectorizeError};

/// Errors that abort a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Vectorize error: {0}")]
    Vectorize(#[from] VectorizeError),

    #[error("Cluster error: {0}")]
    Cluster(#[from] ClusterError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline cancelled")]
    Cancelled,

    #[error("Pipeline run already in progress")]
    AlreadyRunning,
}

impl PodtopicErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Corpus(e) => e.error_code(),
            Self::Vectorize(e) => e.error_code(),
            Self::Cluster(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
            Self::AlreadyRunning => error_code::ALREADY_RUNNING,
        }
    }
}

/// Non-fatal conditions recorded on a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineWarning {
    /// The silhouette score is undefined for this partition; the score is omitted.
    DegenerateCluster { reason: String },
    /// Documents whose text reduced to zero vocabulary terms.
    EmptyDocuments { count: usize },
}

impl std::fmt::Display for PipelineWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateCluster { reason } => {
                write!(f, "degenerate clustering, silhouette omitted: {reason}")
            }
            Self::EmptyDocuments { count } => {
                write!(f, "{count} documents have no vocabulary terms")
            }
        }
    }
}
