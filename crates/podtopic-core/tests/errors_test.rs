//! Tests for the podtopic error handling system.

use podtopic_core::errors::error_code::{self, PodtopicErrorCode};
use podtopic_core::errors::*;

#[test]
fn pipeline_error_forwards_subsystem_codes() {
    let err: PipelineError = VectorizeError::EmptyVocabulary { documents: 3 }.into();
    assert_eq!(err.error_code(), error_code::EMPTY_VOCABULARY);

    let err: PipelineError = ClusterError::InsufficientData {
        documents: 2,
        clusters: 5,
    }
    .into();
    assert_eq!(err.error_code(), error_code::INSUFFICIENT_DATA);

    assert_eq!(PipelineError::Cancelled.error_code(), error_code::CANCELLED);
    assert_eq!(
        PipelineError::AlreadyRunning.error_code(),
        error_code::ALREADY_RUNNING
    );
}

#[test]
fn display_code_prefixes_message() {
    let err = ClusterError::InsufficientData {
        documents: 2,
        clusters: 5,
    };
    assert_eq!(
        err.display_code(),
        "[INSUFFICIENT_DATA] insufficient data: cannot form 5 clusters from 2 documents"
    );
}

#[test]
fn from_conversions_keep_variant() {
    let pipeline: PipelineError = CorpusError::Unavailable {
        reason: "sheet offline".into(),
    }
    .into();
    assert!(matches!(pipeline, PipelineError::Corpus(CorpusError::Unavailable { .. })));

    let pipeline: PipelineError = ConfigError::FileNotFound {
        path: "/tmp/x".into(),
    }
    .into();
    assert!(matches!(pipeline, PipelineError::Config(_)));
}

#[test]
fn warnings_display_reason() {
    let warning = PipelineWarning::DegenerateCluster {
        reason: "only one cluster".into(),
    };
    assert!(warning.to_string().contains("only one cluster"));
}
