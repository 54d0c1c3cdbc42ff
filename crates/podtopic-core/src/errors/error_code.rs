//! PodtopicErrorCode trait for front-end error reporting.

/// Structured error code for every podtopic error enum.
/// Front ends (chat transports, the CLI) log or display the code
/// without matching on variants.
pub trait PodtopicErrorCode {
    /// Returns the error code string (e.g., "EMPTY_VOCABULARY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn display_code(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_CORPUS: &str = "EMPTY_CORPUS";
pub const EMPTY_VOCABULARY: &str = "EMPTY_VOCABULARY";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const INVALID_CLUSTER_COUNT: &str = "INVALID_CLUSTER_COUNT";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const CORPUS_ERROR: &str = "CORPUS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const POLISH_ERROR: &str = "POLISH_ERROR";
pub const CANCELLED: &str = "CANCELLED";
pub const ALREADY_RUNNING: &str = "ALREADY_RUNNING";
