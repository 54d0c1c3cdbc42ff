//! Pipeline monitoring: clustering quality checks and a run dashboard.

pub mod dashboard;
pub mod metrics;

pub use dashboard::PipelineDashboard;
pub use metrics::{assess_quality, QualityAssessment};
