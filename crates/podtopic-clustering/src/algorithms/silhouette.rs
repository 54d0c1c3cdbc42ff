//! Silhouette coefficient for a hard partition.
//!
//! For sample i with own-cluster mean distance `a` and nearest other-cluster
//! mean distance `b`: `s(i) = (b - a) / max(a, b)`. Samples alone in their
//! cluster score 0. The score is the mean over all samples, in [-1, 1].

use std::collections::BTreeMap;

use super::kmeans::squared_distance;

/// Why a silhouette score cannot be computed for a partition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SilhouetteUndefined {
    #[error("needs at least 2 populated clusters, found {found}")]
    TooFewClusters { found: usize },

    #[error("every one of the {samples} samples is alone in its cluster")]
    AllSingletons { samples: usize },
}

/// Mean silhouette coefficient using Euclidean distance.
///
/// Defined only when the number of distinct labels is in `[2, n - 1]`.
pub fn silhouette_score(rows: &[Vec<f64>], labels: &[usize]) -> Result<f64, SilhouetteUndefined> {
    let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, &label) in labels.iter().enumerate() {
        members.entry(label).or_default().push(i);
    }

    let n = labels.len();
    if members.len() < 2 {
        return Err(SilhouetteUndefined::TooFewClusters {
            found: members.len(),
        });
    }
    if members.len() >= n {
        return Err(SilhouetteUndefined::AllSingletons { samples: n });
    }

    let distance = |i: usize, j: usize| squared_distance(&rows[i], &rows[j]).sqrt();

    let total: f64 = (0..n)
        .map(|i| {
            let own = &members[&labels[i]];
            if own.len() == 1 {
                return 0.0;
            }
            let a = own.iter().filter(|&&j| j != i).map(|&j| distance(i, j)).sum::<f64>()
                / (own.len() - 1) as f64;
            let b = members
                .iter()
                .filter(|(&label, _)| label != labels[i])
                .map(|(_, other)| {
                    other.iter().map(|&j| distance(i, j)).sum::<f64>() / other.len() as f64
                })
                .fold(f64::MAX, f64::min);
            let denom = a.max(b);
            if denom > 0.0 {
                (b - a) / denom
            } else {
                0.0
            }
        })
        .sum();

    Ok(total / n as f64)
}
