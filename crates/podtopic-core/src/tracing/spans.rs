//! Span definitions per operation: pipeline runs and recommendations.

/// Create a pipeline-run span.
#[macro_export]
macro_rules! pipeline_span {
    ($provider:expr, $num_clusters:expr) => {
        ::tracing::info_span!("podtopic.pipeline", provider = %$provider, num_clusters = $num_clusters)
    };
}

/// Create a recommendation span.
#[macro_export]
macro_rules! recommend_span {
    ($top_n:expr) => {
        ::tracing::debug_span!("podtopic.recommend", top_n = $top_n)
    };
}

