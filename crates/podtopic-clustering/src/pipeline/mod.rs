//! 5-phase clustering pipeline orchestrator.
//!
//! Phase 1: Ingest → Phase 2: Vectorize → Phase 3: Cluster →
//! Phase 4: Keywords → Phase 5: Title index
//!
//! The first failing phase aborts the run; no partial state is returned.

pub mod phase1_ingest;
pub mod phase2_vectorize;
pub mod phase3_cluster;
pub mod phase4_keywords;
pub mod phase5_index;

use std::time::Instant;

use chrono::Utc;
use podtopic_core::config::ClusteringConfig;
use podtopic_core::constants::{CORPUS_TERMS_LIMIT, TOP_KEYWORDS_PER_CLUSTER};
use podtopic_core::errors::PipelineError;
use podtopic_core::models::{Cluster, ClusterAssignment, ClusterState, RunMetrics};
use podtopic_core::traits::{Cancellable, CancellationToken, CorpusProvider};
use podtopic_core::pipeline_span;
use tracing::{debug, info};

use crate::algorithms::term_frequency;

/// Tunables for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    pub num_clusters: usize,
    pub seed: u64,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub min_df: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from(&ClusteringConfig::default())
    }
}

impl From<&ClusteringConfig> for PipelineOptions {
    fn from(config: &ClusteringConfig) -> Self {
        Self {
            num_clusters: config.num_clusters,
            seed: config.cluster_seed,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            min_df: config.min_df,
        }
    }
}

impl PipelineOptions {
    pub fn with_num_clusters(mut self, num_clusters: usize) -> Self {
        self.num_clusters = num_clusters;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Run the full pipeline against `provider`.
///
/// Returns a complete `ClusterState` (generation 0) with any non-fatal warnings.
pub fn run_pipeline(
    provider: &dyn CorpusProvider,
    options: &PipelineOptions,
) -> Result<ClusterState, PipelineError> {
    run_pipeline_with_cancellation(provider, options, &CancellationToken::new())
}

/// Run the full pipeline, checking `cancel` between phases.
pub fn run_pipeline_with_cancellation(
    provider: &dyn CorpusProvider,
    options: &PipelineOptions,
    cancel: &CancellationToken,
) -> Result<ClusterState, PipelineError> {
    let span = pipeline_span!(provider.name(), options.num_clusters);
    let _enter = span.enter();
    let started = Instant::now();
    let checkpoint = || {
        if cancel.is_cancelled() {
            Err(PipelineError::Cancelled)
        } else {
            Ok(())
        }
    };

    // Phase 1: Ingest.
    let records = provider.load()?;
    let corpus = phase1_ingest::build_corpus(records);
    info!(documents = corpus.len(), "Phase 1: corpus ingested");
    checkpoint()?;

    // Phase 2: Vectorize.
    let texts = corpus.normalized_texts();
    let vectorized = phase2_vectorize::vectorize(&texts, options.min_df)?;
    let mut warnings = vectorized.warnings;
    let matrix = vectorized.matrix;
    info!(
        vocabulary = matrix.n_terms(),
        "Phase 2: TF-IDF matrix built"
    );
    checkpoint()?;

    // Phase 3: Cluster.
    let clustered = phase3_cluster::cluster(&matrix, options)?;
    warnings.extend(clustered.warning.clone());
    info!(
        iterations = clustered.fit.iterations,
        converged = clustered.fit.converged,
        inertia = clustered.fit.inertia,
        silhouette = ?clustered.silhouette,
        "Phase 3: clustering complete"
    );
    checkpoint()?;

    // Phase 4: Keywords.
    let keywords = phase4_keywords::extract_keywords(
        &clustered.fit.centroids,
        &matrix.vocabulary,
        TOP_KEYWORDS_PER_CLUSTER,
    );
    for (id, terms) in keywords.iter().enumerate() {
        debug!(cluster = id, keywords = ?terms, "Phase 4: cluster keywords");
    }

    // Phase 5: Title index.
    let assignment = ClusterAssignment::new(clustered.fit.labels.clone(), options.num_clusters);
    let titles = phase5_index::index_titles(&assignment, &corpus.titles());
    debug!(
        populated = assignment.distinct_labels(),
        sizes = ?assignment.cluster_sizes(),
        "Phase 5: titles indexed"
    );
    checkpoint()?;

    let clusters: Vec<Cluster> = clustered
        .fit
        .centroids
        .into_iter()
        .zip(keywords)
        .zip(titles)
        .enumerate()
        .map(|(id, ((centroid, keywords), member_titles))| Cluster {
            id,
            centroid,
            keywords,
            member_titles,
        })
        .collect();

    let metrics = RunMetrics {
        document_count: corpus.len(),
        vocabulary_size: matrix.n_terms(),
        num_clusters: options.num_clusters,
        cluster_sizes: assignment.cluster_sizes(),
        silhouette: clustered.silhouette,
        inertia: clustered.fit.inertia,
        iterations: clustered.fit.iterations,
        duration_ms: started.elapsed().as_millis() as u64,
    };

    info!(
        clusters = clusters.len(),
        documents = metrics.document_count,
        warnings = warnings.len(),
        duration_ms = metrics.duration_ms,
        "Clustering pipeline complete"
    );

    Ok(ClusterState {
        generation: 0,
        built_at: Utc::now(),
        clusters,
        metrics,
        warnings,
        corpus_terms: term_frequency::top_terms(&texts, CORPUS_TERMS_LIMIT),
    })
}
