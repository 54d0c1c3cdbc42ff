//! # podtopic-core
//!
//! Foundation crate for podtopic.
//! Defines the document and cluster models, the collaborator traits, errors,
//! layered configuration, built-in corpus providers and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod providers;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::PodtopicConfig;
pub use errors::{PipelineError, PipelineWarning};
pub use models::{Cluster, ClusterState, Corpus, CorpusRecord, Document, Recommendation};
pub use traits::{CancellationToken, CorpusProvider, ResponsePolisher};
