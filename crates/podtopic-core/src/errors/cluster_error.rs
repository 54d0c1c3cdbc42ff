//! Clustering errors.

use super::error_code::{self, PodtopicErrorCode};

/// Errors raised by the cluster engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClusterError {
    #[error("insufficient data: cannot form {clusters} clusters from {documents} documents")]
    InsufficientData { documents: usize, clusters: usize },

    #[error("invalid cluster count: {requested}")]
    InvalidClusterCount { requested: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

impl PodtopicErrorCode for ClusterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::InvalidClusterCount { .. } => error_code::INVALID_CLUSTER_COUNT,
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
        }
    }
}
