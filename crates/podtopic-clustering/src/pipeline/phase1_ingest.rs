//! Phase 1 (ingest): turn provider records into normalized documents.

use podtopic_core::models::{Corpus, CorpusRecord, Document};

use crate::algorithms::normalize;

/// Build the corpus in provider order, normalizing each transcript.
pub fn build_corpus(records: Vec<CorpusRecord>) -> Corpus {
    Corpus::new(
        records
            .into_iter()
            .map(|record| {
                let normalized_text = normalize(&record.transcript);
                Document {
                    title: record.title,
                    raw_text: record.transcript,
                    normalized_text,
                }
            })
            .collect(),
    )
}
