//! Data model: documents, clusters, published state, recommendations.

pub mod cluster;
pub mod cluster_state;
pub mod document;
pub mod recommendation;
pub mod run_metrics;

pub use cluster::{Cluster, ClusterAssignment};
pub use cluster_state::ClusterState;
pub use document::{Corpus, CorpusRecord, Document};
pub use recommendation::{ClusterSummary, Recommendation, RecommendationEntry};
pub use run_metrics::RunMetrics;
