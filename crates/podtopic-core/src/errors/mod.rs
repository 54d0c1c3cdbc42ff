//! Error handling for podtopic.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cluster_error;
pub mod config_error;
pub mod corpus_error;
pub mod error_code;
pub mod pipeline_error;
pub mod polish_error;
pub mod vectorize_error;

pub use cluster_error::ClusterError;
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::PodtopicErrorCode;
pub use pipeline_error::{PipelineError, PipelineWarning};
pub use polish_error::PolishError;
pub use vectorize_error::VectorizeError;
