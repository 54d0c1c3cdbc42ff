//! # podtopic-clustering
//!
//! 5-phase clustering pipeline: ingest/normalize → TF-IDF → K-means (+ silhouette)
//! → keyword extraction → title index. The published `ClusterState` answers
//! free-text queries through keyword-overlap scoring.

pub mod algorithms;
pub mod engine;
pub mod monitoring;
pub mod pipeline;
pub mod recommend;

pub use engine::TopicEngine;
pub use monitoring::{PipelineDashboard, QualityAssessment};
pub use pipeline::{run_pipeline, PipelineOptions};
pub use recommend::recommend;
