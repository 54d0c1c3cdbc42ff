use serde::{Deserialize, Serialize};

/// Measurements of one pipeline run, surfaced for monitoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub num_clusters: usize,
    /// Documents per cluster id.
    pub cluster_sizes: Vec<usize>,
    /// Silhouette score in [-1, 1]; `None` when undefined.
    pub silhouette: Option<f64>,
    /// Within-cluster sum of squared distances.
    pub inertia: f64,
    pub iterations: usize,
    pub duration_ms: u64,
}
