use serde::{Deserialize, Serialize};

/// A topic cluster produced by one pipeline run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Zero-based id in `[0, K)`.
    pub id: usize,
    /// Mean feature vector over the frozen vocabulary.
    pub centroid: Vec<f64>,
    /// Top-weighted terms, descending.
    pub keywords: Vec<String>,
    /// Titles of member documents, in corpus order.
    pub member_titles: Vec<String>,
}

impl Cluster {
    /// One-based label shown to users.
    pub fn label(&self) -> usize {
        self.id + 1
    }

    /// The first `len` keywords joined by ", ".
    pub fn short_description(&self, len: usize) -> String {
        let end = len.min(self.keywords.len());
        self.keywords[..end].join(", ")
    }
}

/// Hard partition of documents: `labels[i]` is the cluster of document `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    pub labels: Vec<usize>,
    pub num_clusters: usize,
}

impl ClusterAssignment {
    pub fn new(labels: Vec<usize>, num_clusters: usize) -> Self {
        Self {
            labels,
            num_clusters,
        }
    }

    /// Document indices assigned to `cluster`, ascending.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| label == cluster)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of documents per cluster id.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.num_clusters];
        for &label in &self.labels {
            if label < self.num_clusters {
                sizes[label] += 1;
            }
        }
        sizes
    }

    /// Number of distinct cluster ids actually used.
    pub fn distinct_labels(&self) -> usize {
        self.cluster_sizes().iter().filter(|&&s| s > 0).count()
    }
}
