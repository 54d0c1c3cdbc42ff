//! Phase 5 (title index): group document titles by cluster.

use podtopic_core::models::ClusterAssignment;

/// Titles per cluster id, in corpus order. Duplicate titles are kept.
pub fn index_titles(assignment: &ClusterAssignment, titles: &[String]) -> Vec<Vec<String>> {
    (0..assignment.num_clusters)
        .map(|cluster| {
            assignment
                .members(cluster)
                .into_iter()
                .map(|i| titles[i].clone())
                .collect::<Vec<String>>()
        })
        .collect()
}
