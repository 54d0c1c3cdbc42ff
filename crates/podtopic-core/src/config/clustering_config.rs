use serde::{Deserialize, Serialize};

use super::defaults;

/// Vectorization and clustering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Number of topic clusters (K).
    pub num_clusters: usize,
    /// Seed for centroid initialization.
    pub cluster_seed: u64,
    /// Iteration cap for K-means.
    pub max_iterations: usize,
    /// Convergence tolerance on total centroid shift.
    pub tolerance: f64,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            num_clusters: defaults::DEFAULT_NUM_CLUSTERS,
            cluster_seed: defaults::DEFAULT_CLUSTER_SEED,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            tolerance: defaults::DEFAULT_TOLERANCE,
            min_df: defaults::DEFAULT_MIN_DF,
        }
    }
}
