//! Configuration system for podtopic.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod clustering_config;
pub mod defaults;
pub mod observability_config;
pub mod podtopic_config;
pub mod recommendation_config;

pub use clustering_config::ClusteringConfig;
pub use observability_config::ObservabilityConfig;
pub use podtopic_config::{CliOverrides, PodtopicConfig};
pub use recommendation_config::RecommendationConfig;
