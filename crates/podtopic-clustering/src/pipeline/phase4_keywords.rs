//! Phase 4 (keywords): top centroid terms per cluster.

use crate::algorithms::top_keywords;

/// Keywords per cluster id, `limit` each (fewer if the vocabulary is smaller).
pub fn extract_keywords(centroids: &[Vec<f64>], vocabulary: &[String], limit: usize) -> Vec<Vec<String>> {
    centroids
        .iter()
        .map(|centroid| top_keywords(centroid, vocabulary, limit))
        .collect()
}
