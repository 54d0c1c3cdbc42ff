use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cluster, RunMetrics};
use crate::constants::SHORT_DESCRIPTION_LENGTH;
use crate::errors::PipelineWarning;

/// Immutable snapshot of one successful pipeline run.
///
/// Published behind an `Arc` and replaced wholesale on refresh, so readers
/// always see a consistent cluster/keyword/title triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterState {
    /// Monotonic run counter assigned by the publisher (0 for standalone runs).
    pub generation: u64,
    pub built_at: DateTime<Utc>,
    pub clusters: Vec<Cluster>,
    pub metrics: RunMetrics,
    pub warnings: Vec<PipelineWarning>,
    /// Most frequent corpus terms with counts, descending (word-cloud data).
    pub corpus_terms: Vec<(String, usize)>,
}

impl ClusterState {
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn silhouette(&self) -> Option<f64> {
        self.metrics.silhouette
    }

    /// Keywords per cluster, indexed by cluster id.
    pub fn keywords(&self) -> Vec<&[String]> {
        self.clusters.iter().map(|c| c.keywords.as_slice()).collect()
    }

    /// Titles per cluster, indexed by cluster id.
    pub fn titles(&self) -> Vec<&[String]> {
        self.clusters
            .iter()
            .map(|c| c.member_titles.as_slice())
            .collect()
    }

    /// `Cluster <label>: <description> (<n> episodes)` for every cluster.
    pub fn summary_lines(&self) -> Vec<String> {
        self.clusters
            .iter()
            .map(|c| {
                format!(
                    "Cluster {}: {} ({} episodes)",
                    c.label(),
                    c.short_description(SHORT_DESCRIPTION_LENGTH),
                    c.member_titles.len()
                )
            })
            .collect()
    }

    /// Copy of this state stamped with a publisher generation.
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }
}
