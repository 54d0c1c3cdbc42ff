//! Response polisher errors.

use super::error_code::{self, PodtopicErrorCode};

/// Errors from an optional response polisher (e.g. a local language model).
/// Never surfaced to chat users: the engine falls back to the plain response.
#[derive(Debug, thiserror::Error)]
pub enum PolishError {
    #[error("polisher '{name}' unavailable: {reason}")]
    Unavailable { name: String, reason: String },

    #[error("polisher '{name}' failed: {reason}")]
    Failed { name: String, reason: String },
}

impl PodtopicErrorCode for PolishError {
    fn error_code(&self) -> &'static str {
        error_code::POLISH_ERROR
    }
}
