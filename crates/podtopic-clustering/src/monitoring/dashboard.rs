//! Run history surfaced for observability.

use podtopic_core::models::RunMetrics;
use serde::Serialize;

use super::metrics::QualityAssessment;

/// Snapshot of pipeline health across refreshes.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineDashboard {
    /// Total pipeline runs, successful or not.
    pub total_runs: usize,
    /// Runs that produced a published state.
    pub successful_runs: usize,
    pub failed_runs: usize,
    pub latest_metrics: Option<RunMetrics>,
    pub latest_assessment: Option<QualityAssessment>,
    /// Display form of the most recent failure.
    pub last_error: Option<String>,
    /// Success rate (0.0–1.0).
    pub success_rate: f64,
}

impl PipelineDashboard {
    pub fn new() -> Self {
        Self {
            total_runs: 0,
            successful_runs: 0,
            failed_runs: 0,
            latest_metrics: None,
            latest_assessment: None,
            last_error: None,
            success_rate: 0.0,
        }
    }

    /// Record a run that published a new state.
    pub fn record_success(&mut self, metrics: RunMetrics, assessment: QualityAssessment) {
        self.total_runs += 1;
        self.successful_runs += 1;
        self.latest_metrics = Some(metrics);
        self.latest_assessment = Some(assessment);
        self.update_rate();
    }

    /// Record a run that failed; the previous metrics stay in place.
    pub fn record_failure(&mut self, error: impl ToString) {
        self.total_runs += 1;
        self.failed_runs += 1;
        self.last_error = Some(error.to_string());
        self.update_rate();
    }

    fn update_rate(&mut self) {
        self.success_rate = if self.total_runs > 0 {
            self.successful_runs as f64 / self.total_runs as f64
        } else {
            0.0
        };
    }
}

impl Default for PipelineDashboard {
    fn default() -> Self {
        Self::new()
    }
}
