//! TopicEngine: owns the published `ClusterState`, AtomicBool single-run guard.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use podtopic_core::config::PodtopicConfig;
use podtopic_core::errors::{PipelineError, PodtopicErrorCode};
use podtopic_core::models::ClusterState;
use podtopic_core::traits::{CancellationToken, CorpusProvider, ResponsePolisher};
use tracing::{info, warn};

use crate::monitoring::{self, PipelineDashboard};
use crate::pipeline::{self, PipelineOptions};
use crate::recommend;

/// The main topic engine.
///
/// Runs the clustering pipeline, publishes each successful result as an
/// immutable snapshot and answers recommendation queries against the
/// current snapshot. Readers never block on a running refresh.
pub struct TopicEngine {
    config: PodtopicConfig,
    /// Write lock is held only for the pointer swap.
    state: RwLock<Arc<ClusterState>>,
    generation: AtomicU64,
    /// Guard: only one pipeline run at a time.
    is_running: AtomicBool,
    dashboard: Mutex<PipelineDashboard>,
    polisher: Option<Box<dyn ResponsePolisher>>,
}

/// Releases the single-run guard when dropped.
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl TopicEngine {
    /// Build the engine by running the pipeline once.
    ///
    /// Fails with [`PipelineError::Config`] on an invalid configuration, or
    /// with the run's error if that first run fails.
    pub fn initialize(
        provider: &dyn CorpusProvider,
        config: PodtopicConfig,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        let options = PipelineOptions::from(&config.clustering);
        let state = pipeline::run_pipeline(provider, &options)
            .inspect_err(|err| warn!(error = %err.display_code(), "initial pipeline run failed"))?
            .with_generation(1);
        let mut dashboard = PipelineDashboard::new();
        dashboard.record_success(
            state.metrics.clone(),
            monitoring::assess_quality(&state.metrics),
        );
        info!(
            clusters = state.num_clusters(),
            documents = state.metrics.document_count,
            "topic engine initialized"
        );

        Ok(Self {
            config,
            state: RwLock::new(Arc::new(state)),
            generation: AtomicU64::new(1),
            is_running: AtomicBool::new(false),
            dashboard: Mutex::new(dashboard),
            polisher: None,
        })
    }

    /// Attach a collaborator that rewrites recommendation text.
    pub fn with_polisher(mut self, polisher: Box<dyn ResponsePolisher>) -> Self {
        self.polisher = Some(polisher);
        self
    }

    pub fn config(&self) -> &PodtopicConfig {
        &self.config
    }

    /// Check if a refresh is currently running.
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Current published state. Cheap; holds no lock after returning.
    pub fn snapshot(&self) -> Arc<ClusterState> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Copy of the monitoring dashboard.
    pub fn dashboard(&self) -> PipelineDashboard {
        self.dashboard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rebuild from `provider` and swap the result in.
    ///
    /// On failure the previously published state stays in place.
    pub fn refresh(&self, provider: &dyn CorpusProvider) -> Result<Arc<ClusterState>, PipelineError> {
        self.refresh_with_cancellation(provider, &CancellationToken::new())
    }

    /// Like [`refresh`](Self::refresh), but abandons the run once `cancel` fires.
    pub fn refresh_with_cancellation(
        &self,
        provider: &dyn CorpusProvider,
        cancel: &CancellationToken,
    ) -> Result<Arc<ClusterState>, PipelineError> {
        if self
            .is_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PipelineError::AlreadyRunning);
        }
        let _guard = RunGuard(&self.is_running);

        let options = PipelineOptions::from(&self.config.clustering);
        let result = pipeline::run_pipeline_with_cancellation(provider, &options, cancel);
        let mut dashboard = self.dashboard.lock().unwrap_or_else(PoisonError::into_inner);

        let state = match result {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err.display_code(), "refresh failed, keeping previous state");
                dashboard.record_failure(err.display_code());
                return Err(err);
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let state = Arc::new(state.with_generation(generation));
        let assessment = monitoring::assess_quality(&state.metrics);
        for issue in &assessment.issues {
            warn!(generation, issue = %issue, "clustering quality issue");
        }
        dashboard.record_success(state.metrics.clone(), assessment);

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&state);
        info!(generation, clusters = state.num_clusters(), "cluster state published");
        Ok(state)
    }

    /// Recommend using the configured `top_n`.
    pub fn recommend(&self, user_input: &str) -> String {
        self.recommend_with_top_n(user_input, self.config.recommendation.top_n)
    }

    pub fn recommend_with_top_n(&self, user_input: &str, top_n: usize) -> String {
        let state = self.snapshot();
        let draft = recommend::recommend(user_input, &state, top_n);
        match &self.polisher {
            Some(polisher) => match polisher.polish(user_input, &draft) {
                Ok(polished) => polished,
                Err(err) => {
                    warn!(
                        polisher = polisher.name(),
                        error = %err.display_code(),
                        "response polishing failed, returning plain text"
                    );
                    draft
                }
            },
            None => draft,
        }
    }
}
