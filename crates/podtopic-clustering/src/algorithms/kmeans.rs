//! K-means clustering.
//!
//! Partitions documents into k clusters by minimizing the within-cluster sum
//! of squared distances:
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # Lloyd's Algorithm
//!
//! 1. Initialize k centroids with k-means++ from a seeded RNG
//! 2. **Assign**: each point → nearest centroid (lowest index on ties)
//! 3. **Update**: each centroid → mean of its points
//! 4. Repeat until labels stop changing, the total centroid shift drops
//!    below `tol`, or `max_iter` is reached
//!
//! The whole run is repeated `n_init` times from one seeded RNG and the fit
//! with the lowest inertia is kept (the earliest run wins ties).
//!
//! A cluster that loses all its points takes over the point farthest from its
//! own centroid (from a cluster with more than one member), so with N >= k
//! every cluster id ends up non-empty.

use podtopic_core::errors::ClusterError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Convergence tolerance on total squared centroid shift.
    tol: f64,
    /// Random seed for k-means++ initialization.
    seed: u64,
    /// Independent k-means++ restarts.
    n_init: usize,
}

/// Result of a K-means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    /// Cluster id per input row.
    pub labels: Vec<usize>,
    /// Mean of the rows assigned to each cluster.
    pub centroids: Vec<Vec<f64>>,
    /// Within-cluster sum of squared distances.
    pub inertia: f64,
    /// Lloyd iterations run.
    pub iterations: usize,
    /// Whether the run stopped before `max_iter`.
    pub converged: bool,
}

impl KMeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 300,
            tol: 1e-4,
            seed: 42,
            n_init: 10,
        }
    }

    /// Set the number of restarts (at least one).
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter.max(1);
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit to `data` (one row per document).
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KMeansFit, ClusterError> {
        if self.k == 0 {
            return Err(ClusterError::InvalidClusterCount { requested: 0 });
        }
        let n = data.len();
        if n < self.k {
            return Err(ClusterError::InsufficientData {
                documents: n,
                clusters: self.k,
            });
        }
        let d = data[0].len();
        if let Some(row) = data.iter().find(|row| row.len() != d) {
            return Err(ClusterError::DimensionMismatch {
                expected: d,
                found: row.len(),
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best = self.run_once(data, &mut rng);
        for _ in 1..self.n_init {
            let candidate = self.run_once(data, &mut rng);
            if candidate.inertia < best.inertia {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// One k-means++ initialization followed by Lloyd iterations.
    fn run_once(&self, data: &[Vec<f64>], rng: &mut StdRng) -> KMeansFit {
        let mut centroids = self.init_centroids(data, rng);
        let mut labels = assign(data, &centroids);
        let mut iterations = 0;
        let mut converged = false;

        for iter in 1..=self.max_iter {
            iterations = iter;
            relocate_empty_clusters(data, &centroids, &mut labels, self.k);
            let new_centroids = means(data, &labels, &centroids);

            let shift: f64 = centroids
                .iter()
                .zip(&new_centroids)
                .map(|(a, b)| squared_distance(a, b))
                .sum();
            centroids = new_centroids;

            let new_labels = assign(data, &centroids);
            let changed = new_labels != labels;
            labels = new_labels;

            if !changed || shift < self.tol {
                converged = true;
                break;
            }
        }

        // Final partition: keep every cluster populated and centroids exact.
        relocate_empty_clusters(data, &centroids, &mut labels, self.k);
        let centroids = means(data, &labels, &centroids);
        let inertia = labels
            .iter()
            .zip(data)
            .map(|(&label, row)| squared_distance(row, &centroids[label]))
            .sum();

        KMeansFit {
            labels,
            centroids,
            inertia,
            iterations,
            converged,
        }
    }

    /// Initialize centroids using the k-means++ algorithm.
    fn init_centroids(&self, data: &[Vec<f64>], rng: &mut StdRng) -> Vec<Vec<f64>> {
        let n = data.len();
        let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(self.k);

        // First centroid: random point.
        centroids.push(data[rng.random_range(0..n)].clone());

        // Remaining centroids: sample proportional to squared distance.
        while centroids.len() < self.k {
            let distances: Vec<f64> = data
                .iter()
                .map(|point| {
                    centroids
                        .iter()
                        .map(|c| squared_distance(point, c))
                        .fold(f64::MAX, f64::min)
                })
                .collect();

            let total: f64 = distances.iter().sum();
            if total <= 0.0 {
                centroids.push(data[rng.random_range(0..n)].clone());
                continue;
            }

            let threshold = rng.random::<f64>() * total;
            let mut cumsum = 0.0;
            let mut selected = n - 1;
            for (j, &dist) in distances.iter().enumerate() {
                cumsum += dist;
                if cumsum >= threshold && dist > 0.0 {
                    selected = j;
                    break;
                }
            }
            centroids.push(data[selected].clone());
        }

        centroids
    }
}

/// Squared Euclidean distance.
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Nearest centroid per point; the lowest index wins ties.
fn assign(data: &[Vec<f64>], centroids: &[Vec<f64>]) -> Vec<usize> {
    data.iter()
        .map(|point| {
            let mut best_cluster = 0;
            let mut best_dist = f64::MAX;
            for (k, centroid) in centroids.iter().enumerate() {
                let dist = squared_distance(point, centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best_cluster = k;
                }
            }
            best_cluster
        })
        .collect()
}

/// Mean of assigned points per cluster; an empty cluster keeps its previous centroid.
fn means(data: &[Vec<f64>], labels: &[usize], previous: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let d = data.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0f64; d]; previous.len()];
    let mut counts = vec![0usize; previous.len()];

    for (point, &label) in data.iter().zip(labels) {
        for (acc, &x) in sums[label].iter_mut().zip(point) {
            *acc += x;
        }
        counts[label] += 1;
    }

    sums.into_iter()
        .zip(counts)
        .zip(previous)
        .map(|((sum, count), prev)| {
            if count == 0 {
                prev.clone()
            } else {
                sum.into_iter().map(|s| s / count as f64).collect()
            }
        })
        .collect()
}

/// Give every empty cluster the point farthest from its current centroid,
/// taken only from clusters that keep at least one member.
fn relocate_empty_clusters(
    data: &[Vec<f64>],
    centroids: &[Vec<f64>],
    labels: &mut [usize],
    k: usize,
) {
    let mut counts = vec![0usize; k];
    for &label in labels.iter() {
        counts[label] += 1;
    }
    if counts.iter().all(|&c| c > 0) {
        return;
    }

    let mut by_distance: Vec<(usize, f64)> = labels
        .iter()
        .enumerate()
        .map(|(i, &label)| (i, squared_distance(&data[i], &centroids[label])))
        .collect();
    // Farthest first; stable on ties so lower indices go first.
    by_distance.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut candidates = by_distance.into_iter();
    for cluster in 0..k {
        if counts[cluster] > 0 {
            continue;
        }
        for (i, _) in candidates.by_ref() {
            let donor = labels[i];
            if counts[donor] > 1 {
                counts[donor] -= 1;
                counts[cluster] += 1;
                labels[i] = cluster;
                break;
            }
        }
    }
}
