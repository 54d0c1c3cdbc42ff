//! Phase 2 (vectorize): TF-IDF over the normalized corpus.

use podtopic_core::errors::{PipelineWarning, VectorizeError};
use tracing::warn;

use crate::algorithms::{FeatureMatrix, TfIdfVectorizer};

/// Feature matrix plus warnings about documents that contributed no terms.
#[derive(Debug, Clone)]
pub struct VectorizeOutcome {
    pub matrix: FeatureMatrix,
    pub warnings: Vec<PipelineWarning>,
}

pub fn vectorize(texts: &[String], min_df: usize) -> Result<VectorizeOutcome, VectorizeError> {
    let matrix = TfIdfVectorizer::new()
        .with_min_df(min_df)
        .fit_transform(texts)?;

    let mut warnings = Vec::new();
    let empty = matrix.empty_rows();
    if empty > 0 {
        warn!(documents = empty, "documents reduced to zero vocabulary terms");
        warnings.push(PipelineWarning::EmptyDocuments { count: empty });
    }

    Ok(VectorizeOutcome { matrix, warnings })
}
