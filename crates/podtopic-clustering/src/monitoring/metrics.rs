//! Clustering quality checks:
//! - Silhouette (≥0.05, and defined)
//! - Balance (largest cluster ≤80% of documents when K > 1)

use podtopic_core::models::RunMetrics;
use serde::Serialize;

/// Minimum acceptable silhouette score.
pub const MIN_SILHOUETTE: f64 = 0.05;
/// Maximum share of documents a single cluster may hold.
pub const MAX_DOMINANT_SHARE: f64 = 0.8;

/// Quality assessment of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAssessment {
    pub silhouette_ok: bool,
    pub balance_ok: bool,
    pub overall_pass: bool,
    /// Specific issues found.
    pub issues: Vec<String>,
}

/// Assess the quality of a run's metrics.
pub fn assess_quality(metrics: &RunMetrics) -> QualityAssessment {
    let mut issues = Vec::new();

    let silhouette_ok = match metrics.silhouette {
        Some(score) if score >= MIN_SILHOUETTE => true,
        Some(score) => {
            issues.push(format!(
                "silhouette {:.3} below minimum {:.3}",
                score, MIN_SILHOUETTE
            ));
            false
        }
        None => {
            issues.push("silhouette undefined".to_string());
            false
        }
    };

    let largest = metrics.cluster_sizes.iter().copied().max().unwrap_or(0);
    let share = if metrics.document_count > 0 {
        largest as f64 / metrics.document_count as f64
    } else {
        0.0
    };
    let balance_ok = metrics.num_clusters <= 1 || share <= MAX_DOMINANT_SHARE;
    if !balance_ok {
        issues.push(format!(
            "largest cluster holds {:.0}% of documents, above {:.0}%",
            share * 100.0,
            MAX_DOMINANT_SHARE * 100.0
        ));
    }

    QualityAssessment {
        silhouette_ok,
        balance_ok,
        overall_pass: silhouette_ok && balance_ok,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(silhouette: Option<f64>, cluster_sizes: Vec<usize>) -> RunMetrics {
        RunMetrics {
            document_count: cluster_sizes.iter().sum(),
            vocabulary_size: 20,
            num_clusters: cluster_sizes.len(),
            cluster_sizes,
            silhouette,
            inertia: 1.0,
            iterations: 3,
            duration_ms: 1,
        }
    }

    #[test]
    fn good_metrics_pass() {
        let assessment = assess_quality(&metrics(Some(0.4), vec![3, 3]));
        assert!(assessment.overall_pass);
        assert!(assessment.issues.is_empty());
    }

    #[test]
    fn low_silhouette_fails() {
        let assessment = assess_quality(&metrics(Some(0.01), vec![3, 3]));
        assert!(!assessment.overall_pass);
        assert!(!assessment.silhouette_ok);
        assert!(assessment.balance_ok);
    }

    #[test]
    fn undefined_silhouette_fails() {
        let assessment = assess_quality(&metrics(None, vec![1]));
        assert!(!assessment.silhouette_ok);
        assert!(assessment.balance_ok);
        assert_eq!(assessment.issues, vec!["silhouette undefined".to_string()]);
    }

    #[test]
    fn dominant_cluster_fails_balance() {
        let assessment = assess_quality(&metrics(Some(0.3), vec![9, 1]));
        assert!(!assessment.balance_ok);
        assert!(!assessment.overall_pass);
    }
}
