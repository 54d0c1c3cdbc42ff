//! Phase 3 (cluster): K-means on TF-IDF rows, then silhouette.
//!
//! An undefined silhouette is not fatal: the score is omitted and a
//! `DegenerateCluster` warning is recorded.

use podtopic_core::errors::{ClusterError, PipelineWarning};
use tracing::warn;

use super::PipelineOptions;
use crate::algorithms::{silhouette_score, FeatureMatrix, KMeans, KMeansFit};

#[derive(Debug, Clone)]
pub struct ClusterOutcome {
    pub fit: KMeansFit,
    pub silhouette: Option<f64>,
    pub warning: Option<PipelineWarning>,
}

pub fn cluster(matrix: &FeatureMatrix, options: &PipelineOptions) -> Result<ClusterOutcome, ClusterError> {
    let fit = KMeans::new(options.num_clusters)
        .with_seed(options.seed)
        .with_max_iter(options.max_iterations)
        .with_tol(options.tolerance)
        .fit(&matrix.rows)?;

    let (silhouette, warning) = match silhouette_score(&matrix.rows, &fit.labels) {
        Ok(score) => (Some(score), None),
        Err(undefined) => {
            warn!(reason = %undefined, "silhouette score undefined, omitting");
            (
                None,
                Some(PipelineWarning::DegenerateCluster {
                    reason: undefined.to_string(),
                }),
            )
        }
    };

    Ok(ClusterOutcome {
        fit,
        silhouette,
        warning,
    })
}
